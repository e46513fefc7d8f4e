use jot_core::enums::ItemStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::types::ItemChange;

/// `jot block` / `jot unblock`.
pub async fn run(
    id: &str,
    status: ItemStatus,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let change = apply(id, status, ctx).await?;
    output(&change, flags.format)
}

/// Move an item to `status`. Already being there is a no-op.
pub(crate) async fn apply(
    id: &str,
    status: ItemStatus,
    ctx: &mut AppContext,
) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(id)?;
    let changed = ctx.board.edit(&id, |item| {
        if item.status == status {
            return Ok(false);
        }
        item.transition(status)?;
        Ok(true)
    })?;
    if changed {
        ctx.persist_id(&id).await?;
    }
    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed,
    })
}
