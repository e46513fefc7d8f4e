use clap::Subcommand;

/// Motivation booster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MotivateCommands {
    /// Show a comeback story: random, by number, or next/previous to the
    /// last one shown in this shell.
    Story {
        /// Story number, starting at 1.
        #[arg(conflicts_with_all = ["next", "prev"])]
        number: Option<usize>,
        #[arg(long, conflicts_with = "prev")]
        next: bool,
        #[arg(long)]
        prev: bool,
    },
    /// A random one-line boost.
    Boost,
    /// The hype playlist in shuffled order.
    Playlist,
}
