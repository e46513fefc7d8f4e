use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `jot` binary.
#[derive(Debug, Parser)]
#[command(name = "jot", version, about = "Jotter - a to-do list with timers and streaks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// How responses are printed
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Only errors; no banner or progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory for the local database and session cache
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Flags handed to every command handler.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::subcommands::{
        MotivateCommands, PresetCommands, SessionCommands, SubtaskCommands,
    };
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["jot", "--format", "table", "--verbose", "focus"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Focus));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["jot", "focus", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Focus));
    }

    #[test]
    fn only_known_output_formats_parse() {
        for value in ["json", "table", "raw"] {
            assert!(Cli::try_parse_from(["jot", "-f", value, "focus"]).is_ok(), "{value}");
        }
        assert!(Cli::try_parse_from(["jot", "--format", "xml", "focus"]).is_err());
    }

    #[test]
    fn data_dir_reaches_global_flags() {
        let cli = Cli::try_parse_from(["jot", "--data-dir", "/tmp/jotter", "focus"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(Path::new("/tmp/jotter")));
    }

    #[test]
    fn add_joins_words_and_reads_options() {
        let cli = Cli::try_parse_from([
            "jot",
            "add",
            "Buy",
            "milk",
            "--timer",
            "25m",
            "--priority",
            "1",
            "--category",
            "errands",
            "--recurring",
            "daily",
        ])
        .expect("cli should parse");

        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.text.join(" "), "Buy milk");
        assert_eq!(args.timer.as_deref(), Some("25m"));
        assert_eq!(args.priority, Some(1));
        assert_eq!(args.category.as_deref(), Some("errands"));
        assert_eq!(args.recurring.as_deref(), Some("daily"));
    }

    #[test]
    fn add_rejects_timer_with_hours() {
        let parsed = Cli::try_parse_from(["jot", "add", "x", "--timer", "5m", "--hours", "1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["jot", "add"]).is_err());
    }

    #[test]
    fn edit_rejects_value_with_clear() {
        let parsed =
            Cli::try_parse_from(["jot", "edit", "itm-1", "--notes", "x", "--clear-notes"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn snooze_defaults_to_an_hour() {
        let cli = Cli::try_parse_from(["jot", "snooze", "itm-1"]).expect("cli should parse");
        let Commands::Snooze(args) = cli.command else {
            panic!("expected snooze");
        };
        assert_eq!(args.duration, "1h");
        assert!(!args.tomorrow);
    }

    #[test]
    fn nested_subcommands_parse() {
        let cli = Cli::try_parse_from(["jot", "subtask", "toggle", "itm-1", "sub-2"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Subtask {
                action: SubtaskCommands::Toggle { .. }
            }
        ));

        let cli = Cli::try_parse_from(["jot", "preset", "apply", "maker", "--replace"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Preset {
                action: PresetCommands::Apply { replace: true, .. }
            }
        ));

        let cli = Cli::try_parse_from(["jot", "preset", "clear"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Preset {
                action: PresetCommands::Clear
            }
        ));

        let cli = Cli::try_parse_from(["jot", "session", "new"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Session {
                action: SessionCommands::New
            }
        ));
    }

    #[test]
    fn motivate_story_flags_parse() {
        let cli = Cli::try_parse_from(["jot", "motivate", "story", "--next"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Motivate {
                action: MotivateCommands::Story {
                    number: None,
                    next: true,
                    prev: false
                }
            }
        ));

        let cli = Cli::try_parse_from(["jot", "motivate", "story", "3"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Motivate {
                action: MotivateCommands::Story { number: Some(3), .. }
            }
        ));

        assert!(Cli::try_parse_from(["jot", "motivate", "story", "--next", "--prev"]).is_err());
        assert!(Cli::try_parse_from(["jot", "motivate", "story", "2", "--prev"]).is_err());
    }
}
