//! General application configuration.

use jot_core::enums::View;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_notes_debounce_ms() -> u64 {
    500
}

const fn default_extend_minutes() -> u32 {
    5
}

const fn default_sound() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Fail commands on store write errors instead of logging and moving on.
    #[serde(default)]
    pub strict_writes: bool,

    /// Quiet period before a note edit is written, in milliseconds.
    #[serde(default = "default_notes_debounce_ms")]
    pub notes_debounce_ms: u64,

    /// Initial value of the "extend by" prompt when a timer runs out.
    #[serde(default = "default_extend_minutes")]
    pub extend_minutes: u32,

    /// View used by `jot list` when none is given.
    #[serde(default)]
    pub default_view: View,

    /// Ring the terminal bell on timer ticks and expiry.
    #[serde(default = "default_sound")]
    pub sound: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            strict_writes: false,
            notes_debounce_ms: default_notes_debounce_ms(),
            extend_minutes: default_extend_minutes(),
            default_view: View::default(),
            sound: default_sound(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `extend_minutes` is outside
    /// `1..=60`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60).contains(&self.extend_minutes) {
            return Err(ConfigError::InvalidValue {
                field: "general.extend_minutes".into(),
                reason: format!("{} is outside 1..=60", self.extend_minutes),
            });
        }
        Ok(())
    }
}
