//! Error types for link routing.

use thiserror::Error;

/// Result type for router registration and dispatch.
pub type RouterResult<T> = Result<T, RouterError>;

/// Why a business link was rejected.
///
/// The `Display` text of each variant is the message shown to the user, so it
/// carries the offending location verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Wrong tag for the scheme, or a parameter that does not parse.
    #[error("Badly formed URL: {0}")]
    MalformedUrl(String),

    /// The identifier after the tag is not a GUID.
    #[error("Bad URL: {0}")]
    MalformedIdentifier(String),

    /// The GUID decoded but nothing of that kind has it.
    #[error("No such entity: {0}")]
    EntityNotFound(String),

    /// The owner GUID decoded but the owner's collection does not hold it.
    #[error("No such owner entity: {0}")]
    OwnerNotFound(String),

    /// The owner parameter did not yield an owner.
    #[error("Entity type does not match {kind}: {link}")]
    OwnerTypeMismatch { kind: String, link: String },
}

/// Failure of a single entity lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("identifier is not a valid GUID")]
    MalformedId,

    #[error("no entity with that GUID")]
    NotFound,
}

/// Caller errors: the link or registration never reached a handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("no registered protocol matches link: {0}")]
    UnknownScheme(String),

    #[error("URL type '{0}' has no handler")]
    NoHandler(String),

    #[error("URL type '{0}' is not registered")]
    UnknownUrlType(String),

    #[error("URL type '{0}' cannot use an empty protocol")]
    EmptyProtocol(String),
}
