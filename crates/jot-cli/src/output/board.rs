use jot_core::entities::Item;
use jot_core::responses::{BoardCounts, BoardResponse};
use jot_core::timer::format_time;

use super::table::{TableOptions, render_entity_table};

const HEADERS: [&str; 7] = ["id", "text", "state", "pri", "timer", "streak", "subtasks"];

/// Board as a title, an item table and the counter lines.
#[must_use]
pub fn render_board(board: &BoardResponse, options: TableOptions) -> String {
    let mut out = board.title.clone();
    if let Some(quote) = &board.quote {
        out.push_str(&format!("\n\"{quote}\""));
    }
    out.push_str("\n\n");
    if board.items.is_empty() {
        out.push_str("(nothing here)");
    } else {
        let rows = board.items.iter().map(item_row).collect::<Vec<_>>();
        out.push_str(&render_entity_table(&HEADERS, &rows, options));
    }
    out.push_str("\n\n");
    out.push_str(&counter_lines(&board.counts));

    let rollover = &board.rollover;
    if rollover.expired + rollover.respawned > 0 {
        out.push_str(&format!(
            "\nrollover: {} cleared, {} recurring brought back",
            rollover.expired, rollover.respawned
        ));
    }
    out
}

fn item_row(item: &Item) -> Vec<String> {
    let (done, total) = item.subtask_progress();
    vec![
        item.id.clone(),
        item.text.clone(),
        state(item).to_string(),
        item.priority.map_or_else(|| "-".to_string(), |p| p.to_string()),
        item.timer_duration.map_or_else(
            || "-".to_string(),
            |ms| format_time(i64::try_from(ms).unwrap_or(i64::MAX)),
        ),
        match item.recurring {
            Some(recurring) => format!("{} {recurring}", item.streak),
            None => "-".to_string(),
        },
        if total == 0 { "-".to_string() } else { format!("{done}/{total}") },
    ]
}

fn state(item: &Item) -> &'static str {
    if item.completed {
        "done"
    } else if item.is_snoozed(chrono::Utc::now()) {
        "snoozed"
    } else {
        item.status.as_str()
    }
}

/// "N tasks to go", "Done (N)", "N tasks done today".
#[must_use]
pub fn counter_lines(counts: &BoardCounts) -> String {
    let mut lines = vec![format!("{} {} to go", counts.to_go, plural(counts.to_go))];
    if counts.blocked > 0 {
        lines.push(format!("Blocked ({})", counts.blocked));
    }
    if counts.snoozed > 0 {
        lines.push(format!("Snoozed ({})", counts.snoozed));
    }
    lines.push(format!("Done ({})", counts.completed));
    lines.push(format!("{} {} done today", counts.done_today, plural(counts.done_today)));
    lines.join("\n")
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "task" } else { "tasks" }
}
