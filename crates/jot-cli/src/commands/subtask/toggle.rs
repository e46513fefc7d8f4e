use crate::commands::item::types::ItemChange;
use crate::context::AppContext;

use super::resolve_subtask;

pub async fn run(item: &str, subtask: &str, ctx: &mut AppContext) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(item)?;
    let subtask_id = resolve_subtask(ctx, &id, subtask)?;
    ctx.board.edit(&id, |item| {
        item.toggle_subtask(&subtask_id)?;
        Ok(true)
    })?;
    ctx.persist_id(&id).await?;
    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed: true,
    })
}
