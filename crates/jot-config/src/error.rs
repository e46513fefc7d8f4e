use thiserror::Error;

/// Errors raised while loading [`crate::JotConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The value parsed but is out of range or malformed.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
