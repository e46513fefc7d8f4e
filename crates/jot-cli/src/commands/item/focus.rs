use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_board;

use super::list::board_response;

/// Flip focus mode and show the resulting board. A one-shot `jot focus`
/// always starts from "off", so it prints the single focus item.
pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let on = !ctx.board.focus();
    ctx.board.set_focus(on);
    tracing::debug!(focus = on, "focus mode toggled");
    output_board(&board_response(ctx, ctx.config.general.default_view), flags.format)
}
