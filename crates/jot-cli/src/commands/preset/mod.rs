mod apply;
mod clear;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PresetCommands;
use crate::context::AppContext;

/// Handle `jot preset`.
pub async fn handle(
    action: &PresetCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PresetCommands::List => list::run(flags),
        PresetCommands::Apply { id, replace } => apply::run(id, *replace, ctx, flags).await,
        PresetCommands::Clear => clear::run(ctx, flags).await,
    }
}
