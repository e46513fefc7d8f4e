mod motivate;
mod preset;
mod session;
mod subtask;

pub use motivate::MotivateCommands;
pub use preset::PresetCommands;
pub use session::SessionCommands;
pub use subtask::SubtaskCommands;
