//! Core type definitions for bizlink.
//!
//! This crate defines the small, store-agnostic vocabulary shared by the
//! model and the router:
//! - [`Guid`], the 128-bit entity key and its canonical 32-hex-digit text form
//! - [`EntityKind`], the closed set of business object types links can reference

mod guid;
mod kind;

pub use guid::Guid;
pub use kind::EntityKind;

/// Errors from decoding identifier text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid GUID text: {0:?}")]
    InvalidGuid(String),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
