//! Response types returned as JSON by `jot` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Item;

/// Counters shown under the list ("N tasks to go", "Done (N)").
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardCounts {
    pub to_go: usize,
    pub blocked: usize,
    pub snoozed: usize,
    pub completed: usize,
    /// Completions counted since load, seeded with today's completed items.
    pub done_today: usize,
}

/// What the load-time rollover did.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RolloverSummary {
    pub expired: usize,
    pub respawned: usize,
    pub deferred: usize,
}

/// Response from `jot list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardResponse {
    pub session_id: String,
    /// "To Do List", or "A Day as the ..." while a preset frames the board.
    pub title: String,
    /// The applied preset's quote, if any.
    pub quote: Option<String>,
    pub view: String,
    pub focus: bool,
    pub items: Vec<Item>,
    pub counts: BoardCounts,
    pub rollover: RolloverSummary,
}

/// Response from `jot done`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletionResponse {
    pub item: Item,
    pub changed: bool,
    pub message: Option<String>,
    pub done_today: usize,
}

/// Response from `jot preset apply`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PresetApplyResponse {
    pub preset: String,
    pub title: String,
    pub replaced: bool,
    pub created: Vec<Item>,
}

/// Response from `jot preset clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PresetClearResponse {
    /// Id of the preset that was cleared; `None` when nothing was applied.
    pub preset: Option<String>,
    pub removed: Vec<String>,
}

/// Response from `jot delete` and `jot reset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: Vec<String>,
}
