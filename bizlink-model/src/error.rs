//! Error types for the entity model.

use bizlink_types::{EntityKind, Guid};
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while populating a book.
#[derive(Debug, Error)]
pub enum ModelError {
    /// An entity or account with this GUID is already in its collection.
    #[error("duplicate {kind} GUID: {guid}")]
    DuplicateEntity { kind: String, guid: Guid },

    /// An entity was inserted into a collection of another kind.
    #[error("{found} entity cannot be stored in the {expected} collection")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
}
