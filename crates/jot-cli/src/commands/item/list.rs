use jot_core::enums::View;
use jot_core::responses::BoardResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_board;

pub fn run(args: &ListArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = match args.view.as_deref() {
        Some(raw) => parse_enum::<View>(raw, "view")?,
        None => ctx.config.general.default_view,
    };

    let previous = ctx.board.focus();
    if args.focus {
        ctx.board.set_focus(true);
    }
    let response = board_response(ctx, view);
    ctx.board.set_focus(previous);

    output_board(&response, flags.format)
}

/// Snapshot of the board for `view` at the current instant.
pub(crate) fn board_response(ctx: &AppContext, view: View) -> BoardResponse {
    let now = AppContext::now();
    let focus = ctx.board.focus();
    BoardResponse {
        session_id: ctx.session.id().to_string(),
        title: ctx.board.title(),
        quote: ctx.board.preset().map(|p| p.preset.quote.to_string()),
        view: if focus { "focus".to_string() } else { view.to_string() },
        focus,
        items: ctx.board.visible(view, now).into_iter().cloned().collect(),
        counts: ctx.board.counts(now),
        rollover: ctx.rollover.clone(),
    }
}
