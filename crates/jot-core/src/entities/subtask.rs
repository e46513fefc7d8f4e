use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A checklist entry nested inside an item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subtask {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}
