//! # jot-config
//!
//! Layered configuration loading for Jotter using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JOTTER_*` prefix, `__` as separator)
//! 2. Project-level `.jotter/config.toml`
//! 3. User-level `~/.config/jotter/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JOTTER_STORE__URL` -> `store.url`,
//! `JOTTER_GENERAL__STRICT_WRITES` -> `general.strict_writes`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use jot_config::JotConfig;
//!
//! let config = JotConfig::load_with_dotenv().expect("config");
//! if config.store.is_remote() {
//!     println!("remote store: {}", config.store.url);
//! }
//! ```

mod error;
mod general;
mod session;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "JOTTER_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".jotter/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JotConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl JotConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.session.validate()?;
        self.general.validate()
    }

    /// `~/.config/jotter/config.toml` (platform equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jotter").join("config.toml"))
    }

    /// Default directory for the database file and session cache.
    pub fn default_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("jotter"))
    }
}
