use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The anonymous session every store operation is scoped to.
///
/// Resolved once at startup and passed explicitly; nothing reads the
/// session identifier from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionContext {
    pub id: String,
}

impl SessionContext {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}
