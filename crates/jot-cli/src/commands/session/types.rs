use serde::Serialize;

use crate::context::{AppContext, SessionSource};

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub source: SessionSource,
    pub file: String,
    pub backend: &'static str,
    pub items: usize,
}

impl SessionResponse {
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            session_id: ctx.session.id().to_string(),
            source: ctx.session_source,
            file: ctx.identity.file().display().to_string(),
            backend: if ctx.store.db().is_remote() { "remote" } else { "local" },
            items: ctx.board.items().len(),
        }
    }
}
