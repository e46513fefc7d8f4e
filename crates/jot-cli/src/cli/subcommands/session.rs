use clap::Subcommand;

/// Session identity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Print the current session id and where it came from.
    Show,
    /// Start over with a fresh session id. Old items stay in the store.
    New,
}
