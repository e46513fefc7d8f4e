use clap::Subcommand;

/// Subtask commands. Items accept an id or unique id prefix.
#[derive(Clone, Debug, Subcommand)]
pub enum SubtaskCommands {
    /// Add a subtask to an item.
    Add {
        item: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Flip a subtask between done and not done.
    Toggle { item: String, subtask: String },
    /// Remove a subtask.
    Remove { item: String, subtask: String },
}
