use jot_core::presets::celebration;
use jot_core::responses::CompletionResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::types::ItemChange;

/// `jot done`.
pub async fn run_done(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = complete(id, ctx).await?;
    output(&response, flags.format)
}

/// `jot undo`.
pub async fn run_undo(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let change = reopen(id, ctx).await?;
    output(&change, flags.format)
}

pub(crate) async fn complete(id: &str, ctx: &mut AppContext) -> anyhow::Result<CompletionResponse> {
    let id = ctx.resolve_id(id)?;
    let changed = ctx.board.complete(&id, AppContext::now())?;
    let message = if changed {
        ctx.persist_id(&id).await?;
        Some(celebration()?.to_string())
    } else {
        None
    };

    Ok(CompletionResponse {
        item: ctx.item(&id)?.clone(),
        changed,
        message,
        done_today: ctx.board.total_completed(),
    })
}

pub(crate) async fn reopen(id: &str, ctx: &mut AppContext) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(id)?;
    let changed = ctx.board.reopen(&id)?;
    if changed {
        ctx.persist_id(&id).await?;
    }
    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed,
    })
}
