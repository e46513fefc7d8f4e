use indicatif::{ProgressBar, ProgressStyle};
use jot_core::timer::{Countdown, TimerState};

use crate::ui;

/// Countdown bar for the timer screen. Hidden when progress output is off;
/// notices then go to stderr as plain lines.
pub struct TimerBar {
    bar: Option<ProgressBar>,
}

fn bar_template() -> &'static str {
    match ui::prefs().term_width {
        Some(cols) if cols >= 110 => "{prefix:.bold} {bar:40.cyan/blue} {msg}",
        Some(cols) if cols >= 80 => "{prefix:.bold} {wide_bar:.cyan/blue} {msg}",
        _ => "{wide_bar:.cyan/blue} {msg}",
    }
}

impl TimerBar {
    #[must_use]
    pub fn new(label: &str, total_ms: u64) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total_ms);
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_prefix(label.to_string());
        Self { bar: Some(bar) }
    }

    pub fn update(&self, countdown: &Countdown) {
        if let Some(bar) = &self.bar {
            bar.set_length(countdown.total_ms());
            bar.set_position(countdown.total_ms().saturating_sub(countdown.remaining_ms()));
            bar.set_message(status_line(countdown));
        }
    }

    /// Print a line above the bar.
    pub fn println(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => eprintln!("{line}"),
        }
    }

    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }
}

fn status_line(countdown: &Countdown) -> String {
    let time = countdown.display();
    match countdown.state() {
        TimerState::Idle => format!("{time} (p to start)"),
        TimerState::Paused => format!("{time} paused"),
        TimerState::Expired => "time's up".to_string(),
        TimerState::Running if countdown.is_urgent() => ui::urgent(&time),
        TimerState::Running => time,
    }
}
