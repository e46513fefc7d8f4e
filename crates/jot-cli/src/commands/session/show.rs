use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

use super::types::SessionResponse;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&SessionResponse::from_context(ctx), flags.format)
}
