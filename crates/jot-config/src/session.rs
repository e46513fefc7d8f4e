//! Session identity settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Fixed session id. Overrides the cached one when set, which lets two
    /// machines share a list.
    #[serde(default)]
    pub id: String,

    /// Session cache file. Empty means `<data dir>/session`.
    #[serde(default)]
    pub file: String,
}

impl SessionConfig {
    pub fn has_override(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the override contains whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.has_override() && self.id.trim().chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "session.id".into(),
                reason: "must not contain whitespace".into(),
            });
        }
        Ok(())
    }
}
