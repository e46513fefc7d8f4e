use anyhow::Context;
use jot_core::entities::Item;
use jot_core::ids::new_item_id;
use jot_core::presets::find_preset;
use jot_core::responses::PresetApplyResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    replace: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = apply(id, replace, ctx).await?;
    output(&response, flags.format)
}

/// One new item per ritual, and the preset frames the board until cleared.
/// With `replace` the session is cleared first and the completed counter
/// starts over.
pub(crate) async fn apply(
    id: &str,
    replace: bool,
    ctx: &mut AppContext,
) -> anyhow::Result<PresetApplyResponse> {
    let preset = find_preset(id)?;

    if replace {
        ctx.store
            .clear(&ctx.session)
            .await
            .context("failed to clear session before applying preset")?;
        ctx.board.replace_all(Vec::new());
    }

    let now = AppContext::now();
    let mut created = Vec::with_capacity(preset.rituals.len());
    for ritual in preset.rituals {
        let item = Item::new(new_item_id()?, ritual, now)?;
        ctx.persist(&item).await?;
        created.push(ctx.board.add(item).clone());
    }
    let applied = ctx
        .board
        .record_preset(preset, created.iter().map(|item| item.id.clone()))
        .clone();
    ctx.store
        .remember_preset(&ctx.session, &applied)
        .await
        .context("failed to save the applied preset")?;
    tracing::info!(preset = preset.id, created = created.len(), replace, "preset applied");

    Ok(PresetApplyResponse {
        preset: preset.id.to_string(),
        title: preset.title(),
        replaced: replace,
        created,
    })
}
