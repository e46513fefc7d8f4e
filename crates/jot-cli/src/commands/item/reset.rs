use anyhow::{Context, bail};
use jot_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResetArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ResetArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.yes {
        bail!("reset deletes every item in this session; pass --yes to confirm");
    }
    let response = apply(ctx).await?;
    output(&response, flags.format)
}

pub(crate) async fn apply(ctx: &mut AppContext) -> anyhow::Result<DeleteResponse> {
    let deleted = ctx.board.items().iter().map(|i| i.id.clone()).collect();
    ctx.store
        .clear(&ctx.session)
        .await
        .context("failed to clear session")?;
    ctx.board.replace_all(Vec::new());
    tracing::info!(session = ctx.session.id(), "session reset");
    Ok(DeleteResponse { deleted })
}

#[cfg(test)]
mod tests {
    use jot_config::JotConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::item::test_support::seed;

    #[tokio::test]
    async fn reset_empties_board_store_and_counter() {
        let mut ctx = AppContext::in_memory(JotConfig::default()).await;
        let a = seed(&mut ctx, "a").await;
        let b = seed(&mut ctx, "b").await;
        ctx.board.complete(&a, AppContext::now()).unwrap();

        let response = apply(&mut ctx).await.unwrap();
        assert_eq!(response.deleted, vec![a, b]);
        assert!(ctx.board.items().is_empty());
        assert_eq!(ctx.board.total_completed(), 0);
        assert!(ctx.store.list_by_session(&ctx.session).await.unwrap().is_empty());
    }
}
