//! Entity identifiers.
//!
//! A GUID is 16 opaque bytes. Its canonical text form is exactly 32 hex
//! digits with no separators, which is what business hyperlinks carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Error;

/// Unique identifier for an entity in a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(Uuid);

impl Guid {
    /// Length of the canonical text encoding.
    pub const ENCODING_LENGTH: usize = 32;

    /// Creates a new random GUID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a GUID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Creates a GUID from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Parses the canonical text form.
    ///
    /// Anything other than exactly 32 ASCII hex digits is rejected, including
    /// the hyphenated and braced forms `Uuid` itself would accept.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.len() != Self::ENCODING_LENGTH || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidGuid(s.to_string()));
        }
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Canonical text form: 32 lowercase hex digits.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
