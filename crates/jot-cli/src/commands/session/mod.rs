mod new;
mod show;
mod types;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;

/// Handle `jot session`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SessionCommands::Show => show::run(ctx, flags),
        SessionCommands::New => new::run(ctx, flags).await,
    }
}
