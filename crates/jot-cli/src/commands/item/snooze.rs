use jot_core::timer::parse_duration;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnoozeArgs;
use crate::commands::shared::time::{after_ms, local_tomorrow};
use crate::context::AppContext;
use crate::output::output;

use super::types::ItemChange;

pub async fn run(args: &SnoozeArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let change = snooze(args, ctx).await?;
    output(&change, flags.format)
}

pub async fn run_unsnooze(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let change = unsnooze(id, ctx).await?;
    output(&change, flags.format)
}

pub(crate) async fn snooze(args: &SnoozeArgs, ctx: &mut AppContext) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(&args.id)?;
    let now = AppContext::now();
    let until = if args.tomorrow {
        local_tomorrow()?
    } else {
        after_ms(now, parse_duration(&args.duration)?)?
    };

    ctx.board.edit(&id, |item| {
        item.snooze(until, now)?;
        Ok(true)
    })?;
    ctx.persist_id(&id).await?;
    tracing::debug!(%id, %until, "item snoozed");

    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed: true,
    })
}

pub(crate) async fn unsnooze(id: &str, ctx: &mut AppContext) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(id)?;
    let changed = ctx.board.edit(&id, |item| Ok(item.unsnooze()))?;
    if changed {
        ctx.persist_id(&id).await?;
    }
    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed,
    })
}
