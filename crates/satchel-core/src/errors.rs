//! Cross-cutting error types for Satchel.
//!
//! Storage and delivery errors (`StoreError`, `RemindError`) live in their own
//! crates. A unified error is deferred to `satchel-cli`, where everything
//! converges in `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Satchel crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (empty names, out-of-range numbers, bad marks).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a `NotFound` on the given entity kind.
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
