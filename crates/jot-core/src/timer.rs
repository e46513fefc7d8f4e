//! Countdown timer state machine.
//!
//! Only the configured duration is persisted on the item. Remaining time,
//! pause state and expiry live here and are discarded when the process
//! exits.
//!
//! ```text
//! idle ──start──► running ──tick(…0)──► expired
//!                  │   ▲                  │
//!               pause resume            extend ──► running
//!                  ▼   │
//!                 paused
//! ```

use serde::Serialize;

use crate::errors::CoreError;

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const TICK_EVERY_MS: u64 = 30 * SECOND_MS;
const FINAL_COUNTDOWN_MS: u64 = 5 * SECOND_MS;
const URGENT_BELOW_MS: u64 = MINUTE_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

/// Audible cue requested by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Tick,
    Alarm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    total_ms: u64,
    remaining_ms: u64,
    state: TimerState,
}

impl Countdown {
    /// New idle countdown.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a zero duration.
    pub fn new(total_ms: u64) -> Result<Self, CoreError> {
        if total_ms == 0 {
            return Err(CoreError::Validation("timer duration must be positive".into()));
        }
        Ok(Self {
            total_ms,
            remaining_ms: total_ms,
            state: TimerState::Idle,
        })
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub const fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    #[must_use]
    pub const fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Begin counting. Restarting an expired countdown refills it.
    pub fn start(&mut self) {
        if self.state == TimerState::Expired || self.remaining_ms == 0 {
            self.remaining_ms = self.total_ms;
        }
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.state = TimerState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }
        self.state = TimerState::Running;
        true
    }

    /// Back to idle with the full duration.
    pub fn reset(&mut self) {
        self.remaining_ms = self.total_ms;
        self.state = TimerState::Idle;
    }

    /// Advance by `elapsed_ms`. Only counts while running.
    ///
    /// Returns `Cue::Alarm` on the tick that reaches zero, `Cue::Tick` when
    /// landing on a 30 s boundary or inside the final five seconds.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<Cue> {
        if self.state != TimerState::Running {
            return None;
        }
        let before = self.remaining_ms;
        self.remaining_ms = before.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.state = TimerState::Expired;
            return Some(Cue::Alarm);
        }
        // A multiple of 30 s lies in [remaining, before).
        let crossed_boundary = self.remaining_ms.div_ceil(TICK_EVERY_MS) * TICK_EVERY_MS < before;
        let second_changed = before.div_ceil(SECOND_MS) != self.remaining_ms.div_ceil(SECOND_MS);
        let in_final = self.remaining_ms <= FINAL_COUNTDOWN_MS;
        if crossed_boundary || (in_final && second_changed) {
            Some(Cue::Tick)
        } else {
            None
        }
    }

    /// Add `minutes` after expiry: remaining becomes the extension and the
    /// total grows by the same amount. Returns the added milliseconds so
    /// the caller can persist the new total.
    pub fn extend(&mut self, minutes: u32) -> u64 {
        let extra = u64::from(minutes) * MINUTE_MS;
        self.total_ms = self.total_ms.saturating_add(extra);
        self.remaining_ms = extra;
        self.state = TimerState::Running;
        extra
    }

    /// Fraction elapsed in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_ms == 0 {
            return 0.0;
        }
        (self.total_ms - self.remaining_ms.min(self.total_ms)) as f64 / self.total_ms as f64
    }

    /// Under a minute left and still counting.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.remaining_ms > 0 && self.remaining_ms < URGENT_BELOW_MS
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_time(i64::try_from(self.remaining_ms).unwrap_or(i64::MAX))
    }
}

/// `H:MM:SS` when there are hours, else `M:SS`. Non-positive input renders
/// as `0:00`.
#[must_use]
pub fn format_time(ms: i64) -> String {
    if ms <= 0 {
        return "0:00".to_string();
    }
    let total_secs = ms / 1_000;
    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Minutes offered by the "extend" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendMinutes(u32);

impl ExtendMinutes {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 60;
    pub const STEP: u32 = 5;
    pub const DEFAULT: u32 = 5;

    #[must_use]
    pub fn new(minutes: u32) -> Self {
        Self(minutes.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for ExtendMinutes {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Parse `1h30m`, `45m`, `90s` or a bare number of minutes into
/// milliseconds.
///
/// # Errors
///
/// Returns `CoreError::Validation` on unknown units or malformed numbers.
pub fn parse_duration(input: &str) -> Result<u64, CoreError> {
    let input = input.trim().to_ascii_lowercase();
    if input.is_empty() {
        return Err(CoreError::Validation("empty duration".into()));
    }
    if let Ok(minutes) = input.parse::<u64>() {
        return Ok(minutes * MINUTE_MS);
    }
    let mut total = 0u64;
    let mut digits = String::new();
    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let unit = match ch {
            'h' => 60 * MINUTE_MS,
            'm' => MINUTE_MS,
            's' => SECOND_MS,
            _ => {
                return Err(CoreError::Validation(format!(
                    "invalid duration '{input}': unknown unit '{ch}'"
                )));
            }
        };
        let n: u64 = digits.parse().map_err(|_| {
            CoreError::Validation(format!("invalid duration '{input}': missing number before '{ch}'"))
        })?;
        total = total.saturating_add(n.saturating_mul(unit));
        digits.clear();
    }
    if !digits.is_empty() {
        return Err(CoreError::Validation(format!(
            "invalid duration '{input}': trailing number without unit"
        )));
    }
    Ok(total)
}

/// Duration from separate hour/minute fields, clamped to `0..=23` and
/// `0..=59`. Zero means no timer.
#[must_use]
pub fn hours_minutes_ms(hours: u32, minutes: u32) -> Option<u64> {
    let ms = u64::from(hours.min(23)) * 60 * MINUTE_MS + u64::from(minutes.min(59)) * MINUTE_MS;
    (ms > 0).then_some(ms)
}
