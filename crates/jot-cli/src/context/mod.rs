mod app_context;
mod config_warnings;
mod input;
mod session_identity;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use input::LineInput;
pub use session_identity::{SessionIdentity, SessionSource};
