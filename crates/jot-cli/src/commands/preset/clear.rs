use anyhow::Context;
use jot_core::responses::PresetClearResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = clear(ctx).await?;
    output(&response, flags.format)
}

/// Drop the preset framing and the items it created. Items added by hand
/// stay. Without an applied preset this changes nothing.
pub(crate) async fn clear(ctx: &mut AppContext) -> anyhow::Result<PresetClearResponse> {
    let Some((preset, removed)) = ctx.board.clear_preset() else {
        return Ok(PresetClearResponse {
            preset: None,
            removed: Vec::new(),
        });
    };

    let removed = removed.into_iter().map(|item| item.id).collect::<Vec<_>>();
    ctx.store
        .forget_many(&ctx.session, &removed)
        .await
        .context("failed to delete preset items")?;
    ctx.store
        .forget_preset(&ctx.session)
        .await
        .context("failed to clear the applied preset")?;
    tracing::info!(preset = preset.id, removed = removed.len(), "preset cleared");

    Ok(PresetClearResponse {
        preset: Some(preset.id.to_string()),
        removed,
    })
}
