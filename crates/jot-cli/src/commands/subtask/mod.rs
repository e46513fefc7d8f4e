mod add;
mod remove;
mod toggle;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubtaskCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jot subtask`.
pub async fn handle(
    action: &SubtaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let change = match action {
        SubtaskCommands::Add { item, text } => add::run(item, &text.join(" "), ctx).await?,
        SubtaskCommands::Toggle { item, subtask } => toggle::run(item, subtask, ctx).await?,
        SubtaskCommands::Remove { item, subtask } => remove::run(item, subtask, ctx).await?,
    };
    output(&change, flags.format)
}

/// Full subtask id for an id or unique id prefix within one item.
fn resolve_subtask(ctx: &AppContext, item_id: &str, subtask: &str) -> anyhow::Result<String> {
    let item = ctx.item(item_id)?;
    if item.subtasks.iter().any(|s| s.id == subtask) {
        return Ok(subtask.to_string());
    }
    let mut matches = item.subtasks.iter().filter(|s| s.id.starts_with(subtask));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found.id.clone()),
        (Some(_), Some(_)) => anyhow::bail!("subtask prefix '{subtask}' is ambiguous"),
        (None, _) => anyhow::bail!("subtask {subtask} not found on item {item_id}"),
    }
}

#[cfg(test)]
mod tests {
    use jot_config::JotConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::item::test_support::seed;

    #[tokio::test]
    async fn add_toggle_remove_roundtrip_through_store() {
        let mut ctx = AppContext::in_memory(JotConfig::default()).await;
        let id = seed(&mut ctx, "pack for trip").await;

        add::run(&id, "passport", &mut ctx).await.unwrap();
        let change = add::run(&id, "charger", &mut ctx).await.unwrap();
        assert_eq!(change.item.subtasks.len(), 2);
        let first = change.item.subtasks[0].id.clone();

        let change = toggle::run(&id, &first[..10], &mut ctx).await.unwrap();
        assert_eq!(change.item.subtask_progress(), (1, 2));
        let stored = ctx.store.get(&ctx.session, &id).await.unwrap();
        assert!(stored.subtasks[0].completed);

        let change = remove::run(&id, &first, &mut ctx).await.unwrap();
        assert_eq!(change.item.subtasks.len(), 1);
        assert_eq!(ctx.store.get(&ctx.session, &id).await.unwrap().subtasks.len(), 1);
    }

    #[tokio::test]
    async fn unknown_subtask_errors() {
        let mut ctx = AppContext::in_memory(JotConfig::default()).await;
        let id = seed(&mut ctx, "solo").await;
        assert!(toggle::run(&id, "sub-nope", &mut ctx).await.is_err());
    }
}
