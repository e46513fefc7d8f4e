pub mod dispatch;
pub mod item;
pub mod motivate;
pub mod preset;
pub mod schema;
pub mod session;
pub mod shared;
pub mod shell;
pub mod subtask;
pub mod timer;
