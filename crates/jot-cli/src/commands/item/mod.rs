//! Root-level item commands: `add`, `list`, `get`, `edit`, `done`, `undo`,
//! `delete`, `snooze`, `unsnooze`, `block`, `unblock`, `focus`, `reset`.
//!
//! Each handler mutates `ctx.board` first and then persists the touched
//! item. The `apply` halves return the response so the shell and tests can
//! reuse them without printing.

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod focus;
pub mod get;
pub mod list;
pub mod reset;
pub mod snooze;
pub mod status;
pub mod types;
