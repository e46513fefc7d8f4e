use jot_core::ids::new_subtask_id;

use crate::commands::item::types::ItemChange;
use crate::context::AppContext;

pub async fn run(item: &str, text: &str, ctx: &mut AppContext) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(item)?;
    let subtask_id = new_subtask_id()?;
    ctx.board.edit(&id, |item| {
        item.add_subtask(subtask_id, text)?;
        Ok(true)
    })?;
    ctx.persist_id(&id).await?;
    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed: true,
    })
}
