//! `jot motivate`: comeback stories, boosts and the hype playlist.
//!
//! The context remembers the last story and boost, so inside `jot shell`
//! `motivate story --next` walks the list and `motivate boost` never shows
//! the same line twice in a row.

use anyhow::bail;
use jot_core::motivation::{
    HypeSong, STORIES, Story, boost, next_story, prev_story, random_story, shuffled_playlist,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MotivateCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    /// 1-based position in the catalog.
    pub number: usize,
    pub total: usize,
    #[serde(flatten)]
    pub story: Story,
}

#[derive(Debug, Serialize)]
pub struct BoostResponse {
    pub boost: &'static str,
}

pub fn handle(
    action: &MotivateCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MotivateCommands::Story { number, next, prev } => {
            let response = story(*number, *next, *prev, ctx)?;
            output(&response, flags.format)
        }
        MotivateCommands::Boost => output(&next_boost(ctx)?, flags.format),
        MotivateCommands::Playlist => output(&playlist()?, flags.format),
    }
}

/// Pick a story. `--next`/`--prev` without an earlier story start from a
/// random one.
pub(crate) fn story(
    number: Option<usize>,
    next: bool,
    prev: bool,
    ctx: &mut AppContext,
) -> anyhow::Result<StoryResponse> {
    let index = match number {
        Some(n) if n == 0 || n > STORIES.len() => {
            bail!("story number must be between 1 and {}", STORIES.len())
        }
        Some(n) => n - 1,
        None => match ctx.last_story {
            Some(last) if next => next_story(last),
            Some(last) if prev => prev_story(last),
            _ => random_story()?,
        },
    };
    ctx.last_story = Some(index);
    tracing::debug!(story = STORIES[index].id, "story shown");

    Ok(StoryResponse {
        number: index + 1,
        total: STORIES.len(),
        story: STORIES[index],
    })
}

pub(crate) fn next_boost(ctx: &mut AppContext) -> anyhow::Result<BoostResponse> {
    let line = boost(ctx.last_boost)?;
    ctx.last_boost = Some(line);
    Ok(BoostResponse { boost: line })
}

pub(crate) fn playlist() -> anyhow::Result<Vec<HypeSong>> {
    Ok(shuffled_playlist()?)
}
