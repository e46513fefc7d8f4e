use jot_core::entities::Item;
use jot_core::ids::new_item_id;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::parse::{parse_optional_enum, parse_timer};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = apply(args, ctx).await?;
    output(&item, flags.format)
}

pub(crate) async fn apply(args: &AddArgs, ctx: &mut AppContext) -> anyhow::Result<Item> {
    let mut item = Item::new(new_item_id()?, &args.text.join(" "), AppContext::now())?;
    item.timer_duration = parse_timer(args.timer.as_deref(), args.hours, args.minutes)?;
    item.priority = args.priority;
    item.category = parse_optional_enum(args.category.as_deref(), "category")?;
    item.recurring = parse_optional_enum(args.recurring.as_deref(), "recurring")?;
    item.set_notes(args.notes.as_deref());

    let item = ctx.board.add(item).clone();
    ctx.persist(&item).await?;
    tracing::debug!(id = %item.id, "item added");
    Ok(item)
}
