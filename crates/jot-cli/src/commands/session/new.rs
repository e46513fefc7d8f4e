use crate::cli::GlobalFlags;
use crate::context::{AppContext, SessionSource};
use crate::output::output;

use super::types::SessionResponse;

/// Rotate the cached session id and switch to the (empty) new session.
pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let previous = ctx.session.id().to_string();
    let session = ctx.identity.rotate()?;
    ctx.switch_session(session, SessionSource::Created).await?;
    tracing::info!(%previous, current = ctx.session.id(), "started new session");
    output(&SessionResponse::from_context(ctx), flags.format)
}
