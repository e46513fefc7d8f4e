use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    MotivateCommands, PresetCommands, SessionCommands, SubtaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add an item.
    Add(AddArgs),
    /// List items in a view.
    List(ListArgs),
    /// Show one item.
    Get { id: String },
    /// Edit fields of an item.
    Edit(EditArgs),
    /// Mark an item completed.
    Done { id: String },
    /// Reopen a completed item.
    Undo { id: String },
    /// Delete an item.
    Delete { id: String },
    /// Hide an item until later.
    Snooze(SnoozeArgs),
    /// Bring a snoozed item back now.
    Unsnooze { id: String },
    /// Mark an item blocked.
    Block { id: String },
    /// Mark a blocked item active again.
    Unblock { id: String },
    /// Subtasks of an item.
    Subtask {
        #[command(subcommand)]
        action: SubtaskCommands,
    },
    /// Run an item's countdown timer.
    Timer(TimerArgs),
    /// Toggle focus mode (show only the most urgent active item).
    Focus,
    /// Delete every item in the session.
    Reset(ResetArgs),
    /// Ritual presets.
    Preset {
        #[command(subcommand)]
        action: PresetCommands,
    },
    /// Stories, boosts and a playlist for when the list feels heavy.
    Motivate {
        #[command(subcommand)]
        action: MotivateCommands,
    },
    /// Session identity.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Interactive shell over the current session.
    Shell,
    /// Print the JSON schema of a response type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Item text.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Timer duration, e.g. 25m, 1h30m, 90s.
    #[arg(long, conflicts_with_all = ["hours", "minutes"])]
    pub timer: Option<String>,
    /// Timer hours (0-23).
    #[arg(long)]
    pub hours: Option<u32>,
    /// Timer minutes (0-59).
    #[arg(long)]
    pub minutes: Option<u32>,
    /// Priority, lower is more urgent.
    #[arg(short, long)]
    pub priority: Option<u32>,
    /// work, personal, health, errands or learning.
    #[arg(short, long)]
    pub category: Option<String>,
    /// daily or weekdays.
    #[arg(short, long)]
    pub recurring: Option<String>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// all, active, blocked, snoozed or completed.
    #[arg(long)]
    pub view: Option<String>,
    /// Show only the most urgent active item.
    #[arg(long)]
    pub focus: bool,
}

#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    #[arg(long)]
    pub clear_notes: bool,
    /// Timer duration, e.g. 25m; 0 removes the timer.
    #[arg(long, conflicts_with = "clear_timer")]
    pub timer: Option<String>,
    #[arg(long)]
    pub clear_timer: bool,
    #[arg(long, conflicts_with = "clear_priority")]
    pub priority: Option<u32>,
    #[arg(long)]
    pub clear_priority: bool,
    #[arg(long, conflicts_with = "clear_category")]
    pub category: Option<String>,
    #[arg(long)]
    pub clear_category: bool,
    #[arg(long, conflicts_with = "clear_recurring")]
    pub recurring: Option<String>,
    #[arg(long)]
    pub clear_recurring: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SnoozeArgs {
    pub id: String,
    /// How long to hide the item, e.g. 30m, 2h.
    #[arg(long = "for", default_value = "1h", conflicts_with = "tomorrow")]
    pub duration: String,
    /// Hide until the start of tomorrow (local time).
    #[arg(long)]
    pub tomorrow: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TimerArgs {
    pub id: String,
    /// Initial extension offered when the timer runs out (1-60 minutes).
    #[arg(long)]
    pub extend_by: Option<u32>,
    /// Do not ring the terminal bell.
    #[arg(long)]
    pub mute: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ResetArgs {
    /// Confirm deleting every item.
    #[arg(long)]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// item, subtask, board, completion, preset-apply, preset-clear or delete.
    pub type_name: String,
}
