//! What happens when a write to the store fails.
//!
//! The client updates its in-memory state before writing. Under
//! [`WritePolicy::BestEffort`] a failed write is logged and dropped so the
//! optimistic change stands for the rest of the process. Under
//! [`WritePolicy::Strict`] the error is returned to the caller.

use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    #[default]
    BestEffort,
    Strict,
}

impl WritePolicy {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::BestEffort }
    }

    /// Resolve a write result. `Ok(None)` means the failure was swallowed.
    ///
    /// # Errors
    ///
    /// Returns the write error under `Strict`.
    pub fn settle<T>(
        self,
        op: &str,
        id: &str,
        result: Result<T, DatabaseError>,
    ) -> Result<Option<T>, DatabaseError> {
        match (self, result) {
            (_, Ok(v)) => Ok(Some(v)),
            (Self::BestEffort, Err(error)) => {
                tracing::error!(op, id, %error, "store write failed; keeping local change");
                Ok(None)
            }
            (Self::Strict, Err(error)) => Err(error),
        }
    }
}
