use anyhow::bail;
use jot_core::enums::ItemStatus;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::item;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `shell` and `schema` are routed by `main` before a context exists.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => item::add::run(&args, ctx, flags).await,
        Commands::List(args) => item::list::run(&args, ctx, flags),
        Commands::Get { id } => item::get::run(&id, ctx, flags),
        Commands::Edit(args) => item::edit::run(&args, ctx, flags).await,
        Commands::Done { id } => item::complete::run_done(&id, ctx, flags).await,
        Commands::Undo { id } => item::complete::run_undo(&id, ctx, flags).await,
        Commands::Delete { id } => item::delete::run(&id, ctx, flags).await,
        Commands::Snooze(args) => item::snooze::run(&args, ctx, flags).await,
        Commands::Unsnooze { id } => item::snooze::run_unsnooze(&id, ctx, flags).await,
        Commands::Block { id } => item::status::run(&id, ItemStatus::Blocked, ctx, flags).await,
        Commands::Unblock { id } => item::status::run(&id, ItemStatus::Active, ctx, flags).await,
        Commands::Subtask { action } => commands::subtask::handle(&action, ctx, flags).await,
        Commands::Timer(args) => commands::timer::run(&args, ctx, flags).await,
        Commands::Focus => item::focus::run(ctx, flags),
        Commands::Reset(args) => item::reset::run(&args, ctx, flags).await,
        Commands::Preset { action } => commands::preset::handle(&action, ctx, flags).await,
        Commands::Motivate { action } => commands::motivate::handle(&action, ctx, flags),
        Commands::Session { action } => commands::session::handle(&action, ctx, flags).await,
        Commands::Shell => bail!("already in the shell"),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
