use clap::Subcommand;

/// Ritual preset commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PresetCommands {
    /// List built-in presets.
    List,
    /// Add one item per ritual of a preset.
    Apply {
        id: String,
        /// Delete the session's items first.
        #[arg(long)]
        replace: bool,
    },
    /// Remove the applied preset's items and go back to the plain list.
    Clear,
}
