//! Item store location.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Where items live. A non-empty `url` selects a remote libSQL server;
/// otherwise the local file at `local_path` (or the data-dir default).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Remote database URL (e.g. `libsql://jotter-me.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database. May be empty for an
    /// unauthenticated local `sqld`.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file. Empty means `<data dir>/jotter.db`.
    #[serde(default)]
    pub local_path: String,
}

impl StoreConfig {
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a URL with an unsupported scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_remote() {
            return Ok(());
        }
        let supported = ["libsql://", "https://", "http://", "wss://", "ws://"];
        if supported.iter().any(|scheme| self.url.starts_with(scheme)) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "store.url".into(),
                reason: format!("unsupported scheme in '{}'", self.url),
            })
        }
    }
}
