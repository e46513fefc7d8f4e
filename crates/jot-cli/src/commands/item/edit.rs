use jot_core::enums::{Category, Recurrence};
use jot_core::timer::parse_duration;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

use super::types::ItemChange;

pub async fn run(args: &EditArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let change = apply(args, ctx).await?;
    output(&change, flags.format)
}

/// `Some(None)` clears a field, `Some(Some(v))` sets it, `None` leaves it.
fn field<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}

pub(crate) async fn apply(args: &EditArgs, ctx: &mut AppContext) -> anyhow::Result<ItemChange> {
    let id = ctx.resolve_id(&args.id)?;

    let timer = field(args.timer.as_deref().map(parse_duration).transpose()?, args.clear_timer);
    let priority = field(args.priority, args.clear_priority);
    let category = field(
        parse_optional_enum::<Category>(args.category.as_deref(), "category")?,
        args.clear_category,
    );
    let recurring = field(
        parse_optional_enum::<Recurrence>(args.recurring.as_deref(), "recurring")?,
        args.clear_recurring,
    );
    let notes = field(args.notes.as_deref(), args.clear_notes);

    let changed = ctx.board.edit(&id, |item| {
        let mut changed = false;
        if let Some(text) = &args.text {
            changed |= item.rename(text);
        }
        if let Some(notes) = notes {
            changed |= item.set_notes(notes);
        }
        if let Some(timer) = timer {
            changed |= item.set_timer(timer);
        }
        if let Some(priority) = priority {
            changed |= item.priority != priority;
            item.priority = priority;
        }
        if let Some(category) = category {
            changed |= item.category != category;
            item.category = category;
        }
        if let Some(recurring) = recurring {
            changed |= item.recurring != recurring;
            item.recurring = recurring;
        }
        Ok(changed)
    })?;

    if changed {
        ctx.persist_id(&id).await?;
    } else {
        tracing::debug!(%id, "edit left item unchanged");
    }

    Ok(ItemChange {
        item: ctx.item(&id)?.clone(),
        changed,
    })
}
