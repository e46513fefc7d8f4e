//! Cross-cutting error types for Jotter.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. Everything converges on `anyhow` in `jot-cli`.

use thiserror::Error;

/// Errors raised by domain operations on items and the board.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A status transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (empty text, out-of-range values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn item_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "item".to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn subtask_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "subtask".to_string(),
            id: id.to_string(),
        }
    }
}
