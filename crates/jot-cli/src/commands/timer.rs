//! Interactive countdown screen for one item.
//!
//! Ticks once per second on a tokio interval and reads single-letter
//! commands from the shared line input. Only the item's timer total is
//! persisted (when the user extends an expired countdown); remaining time
//! is dropped when the screen closes.

use std::time::Duration;

use anyhow::Context;
use jot_core::entities::Item;
use jot_core::timer::{Countdown, Cue, ExtendMinutes, TimerState};
use serde::Serialize;
use tokio::time::MissedTickBehavior;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TimerArgs;
use crate::commands::item::complete::complete;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::TimerBar;
use crate::ui;

const TICK: Duration = Duration::from_secs(1);
const TICK_MS: u64 = 1_000;

const HELP: &str = "p start/pause  r reset  d done  q stop  +/- adjust extension  e extend";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerOutcome {
    Completed,
    Stopped,
}

#[derive(Debug, Serialize)]
pub struct TimerResponse {
    pub item: Item,
    pub outcome: TimerOutcome,
    pub remaining_ms: u64,
    pub extended_ms: u64,
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Key {
    Toggle,
    Reset,
    Done,
    Quit,
    More,
    Less,
    Extend,
}

fn parse_key(line: &str) -> Option<Key> {
    match line.trim().to_ascii_lowercase().as_str() {
        "p" | "pause" | "resume" | "start" => Some(Key::Toggle),
        "r" | "reset" => Some(Key::Reset),
        "d" | "done" => Some(Key::Done),
        "q" | "quit" | "stop" => Some(Key::Quit),
        "+" => Some(Key::More),
        "-" => Some(Key::Less),
        "e" | "extend" => Some(Key::Extend),
        _ => None,
    }
}

enum Event {
    Tick,
    Line(Option<String>),
}

pub async fn run(args: &TimerArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run_screen(args, ctx).await?;
    output(&response, flags.format)
}

/// Claim the single running-timer slot for the item, drive the screen, and
/// release the slot however the screen ends.
pub(crate) async fn run_screen(args: &TimerArgs, ctx: &mut AppContext) -> anyhow::Result<TimerResponse> {
    let id = ctx.resolve_id(&args.id)?;
    if let Some(previous) = ctx.board.start_timer(&id)? {
        tracing::info!(%previous, current = %id, "replaced running timer");
    }
    let result = drive(&id, args, ctx).await;
    ctx.board.stop_timer();
    result
}

async fn drive(id: &str, args: &TimerArgs, ctx: &mut AppContext) -> anyhow::Result<TimerResponse> {
    let (label, total) = {
        let item = ctx.item(id)?;
        let total = item.timer_duration.context("item has no timer")?;
        (item.text.clone(), total)
    };
    let mut countdown = Countdown::new(total)?;
    let mut extension = ExtendMinutes::new(args.extend_by.unwrap_or(ctx.config.general.extend_minutes));
    let sound = ctx.config.general.sound && !args.mute;
    let mut extended_ms = 0;

    let bar = TimerBar::new(&label, total);
    bar.println(HELP);
    countdown.start();

    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        bar.update(&countdown);
        let event = tokio::select! {
            _ = ticker.tick() => Event::Tick,
            line = ctx.input.next_line() => Event::Line(line?),
        };

        let key = match event {
            Event::Tick => {
                match countdown.tick(TICK_MS) {
                    Some(Cue::Alarm) => {
                        if sound {
                            ui::bell();
                        }
                        bar.println(&format!(
                            "Time's up! e extends by {} min (+/- to adjust), d marks it done",
                            extension.get()
                        ));
                    }
                    Some(Cue::Tick) if sound => ui::bell(),
                    _ => {}
                }
                continue;
            }
            Event::Line(None) => Key::Quit,
            Event::Line(Some(line)) => {
                let Some(key) = parse_key(&line) else {
                    bar.println(HELP);
                    continue;
                };
                key
            }
        };

        match key {
            Key::Toggle => match countdown.state() {
                TimerState::Idle => countdown.start(),
                TimerState::Running => {
                    countdown.pause();
                }
                TimerState::Paused => {
                    countdown.resume();
                }
                TimerState::Expired => bar.println("timer is done; e to extend or d to finish"),
            },
            Key::Reset => countdown.reset(),
            Key::More => {
                extension = extension.increment();
                bar.println(&format!("extension: {} min", extension.get()));
            }
            Key::Less => {
                extension = extension.decrement();
                bar.println(&format!("extension: {} min", extension.get()));
            }
            Key::Extend => {
                if countdown.state() == TimerState::Expired {
                    extended_ms += extend_item(ctx, id, &mut countdown, extension).await?;
                    bar.println(&format!("extended by {} min", extension.get()));
                } else {
                    bar.println("extend is available once the timer runs out");
                }
            }
            Key::Done => {
                let completion = complete(id, ctx).await?;
                bar.finish("done");
                return Ok(TimerResponse {
                    item: completion.item,
                    outcome: TimerOutcome::Completed,
                    remaining_ms: countdown.remaining_ms(),
                    extended_ms,
                    message: completion.message,
                });
            }
            Key::Quit => {
                bar.finish("stopped");
                return Ok(TimerResponse {
                    item: ctx.item(id)?.clone(),
                    outcome: TimerOutcome::Stopped,
                    remaining_ms: countdown.remaining_ms(),
                    extended_ms,
                    message: None,
                });
            }
        }
    }
}

/// Restart an expired countdown with `extension` and grow the persisted
/// total by the same amount. Returns the added milliseconds.
async fn extend_item(
    ctx: &mut AppContext,
    id: &str,
    countdown: &mut Countdown,
    extension: ExtendMinutes,
) -> anyhow::Result<u64> {
    let extra = countdown.extend(extension.get());
    ctx.board.edit(id, |item| {
        item.extend_timer(extra);
        Ok(true)
    })?;
    ctx.persist_id(id).await?;
    tracing::debug!(%id, extra_ms = extra, "timer extended");
    Ok(extra)
}
