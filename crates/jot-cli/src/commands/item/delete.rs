use anyhow::Context;
use jot_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = apply(id, ctx).await?;
    output(&response, flags.format)
}

pub(crate) async fn apply(id: &str, ctx: &mut AppContext) -> anyhow::Result<DeleteResponse> {
    let id = ctx.resolve_id(id)?;
    let removed = ctx.board.remove(&id)?;
    ctx.store
        .forget(&removed.id)
        .await
        .with_context(|| format!("failed to delete item {id}"))?;
    Ok(DeleteResponse { deleted: vec![id] })
}
