//! `jot shell`: a line-oriented REPL over one loaded session.
//!
//! Every line is parsed with the same clap tree as the binary, so `done 3f`
//! or `add Buy milk --priority 1` behave exactly like their one-shot
//! forms, except that board state (focus mode, the done-today counter, the
//! running timer) carries over between lines. `note <id> <text>` goes
//! through the debounced writer; any other command flushes it first so a
//! late note write cannot clobber a newer edit.

use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use jot_db::NotesDebouncer;

use crate::cli::{Cli, Commands, GlobalFlags};
use crate::commands::dispatch::dispatch;
use crate::commands::item::list::board_response;
use crate::context::AppContext;
use crate::output::output_board;
use crate::ui;

const PROMPT: &str = "jot> ";
const BANNER: &str = "jot shell: any jot command without the leading `jot`; `note <id> <text>` edits notes; `quit` exits.";

pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut notes = NotesDebouncer::new(
        ctx.store.clone(),
        ctx.session.clone(),
        Duration::from_millis(ctx.config.general.notes_debounce_ms),
    );

    if !flags.quiet {
        eprintln!("{BANNER}");
        output_board(&board_response(ctx, ctx.config.general.default_view), flags.format)?;
    }

    loop {
        ui::prompt(PROMPT);
        let Some(line) = ctx.input.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        if let Some(rest) = line.strip_prefix("note ") {
            if let Err(error) = stage_note(rest, ctx, &mut notes) {
                eprintln!("jot error: {error:#}");
            }
            continue;
        }

        notes.flush().await.context("failed to save notes")?;
        if let Err(error) = run_line(line, ctx, flags).await {
            eprintln!("jot error: {error:#}");
        }
    }

    notes.flush().await.context("failed to save notes")?;
    Ok(())
}

/// Parse and run one command line.
async fn run_line(line: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let words = split_words(line)?;
    let cli = match Cli::try_parse_from(std::iter::once("jot".to_string()).chain(words)) {
        Ok(cli) => cli,
        Err(error) => {
            // clap renders help and usage errors itself
            let _ = error.print();
            return Ok(());
        }
    };
    match cli.command {
        Commands::Shell => bail!("already in the shell"),
        command => dispatch(command, ctx, flags).await,
    }
}

/// Apply a note edit to the board now and queue the write.
fn stage_note(rest: &str, ctx: &mut AppContext, notes: &mut NotesDebouncer) -> anyhow::Result<()> {
    let rest = rest.trim_start();
    let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let id = ctx.resolve_id(id)?;
    let note = text.trim();
    let changed = ctx
        .board
        .edit(&id, |item| Ok(item.set_notes((!note.is_empty()).then_some(note))))?;
    if changed {
        notes.push(ctx.item(&id)?.clone());
    }
    Ok(())
}

/// Split a line on whitespace, keeping single- or double-quoted runs
/// together.
fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("unterminated {q} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use jot_config::{GeneralConfig, JotConfig};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::commands::item::test_support::seed;
    use crate::context::LineInput;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            data_dir: None,
        }
    }

    fn config(debounce_ms: u64) -> JotConfig {
        JotConfig {
            general: GeneralConfig {
                notes_debounce_ms: debounce_ms,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn splits_quoted_words() {
        assert_eq!(
            split_words(r#"add "Buy oat milk" --notes 'the good one'  -p 1"#).unwrap(),
            vec!["add", "Buy oat milk", "--notes", "the good one", "-p", "1"]
        );
        assert_eq!(split_words("edit x --notes \"\"").unwrap(), vec!["edit", "x", "--notes", ""]);
        assert!(split_words("add \"open").is_err());
    }

    #[tokio::test]
    async fn lines_share_board_state() {
        let mut ctx = AppContext::in_memory(config(500)).await;
        ctx.input = LineInput::scripted([
            "add Buy milk",
            "add \"Walk the dog\" --priority 0",
            "focus",
            "bogus-command",
            "shell",
            "quit",
            "add never reached",
        ]);

        run(&mut ctx, &flags()).await.unwrap();

        let texts: Vec<_> = ctx.board.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Buy milk", "Walk the dog"]);
        assert!(ctx.board.focus());
        assert_eq!(ctx.store.list_by_session(&ctx.session).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn done_keyword_completes_and_counts() {
        let mut ctx = AppContext::in_memory(config(500)).await;
        let id = seed(&mut ctx, "stretch").await;
        ctx.input = LineInput::scripted([format!("done {}", &id[..10])]);

        run(&mut ctx, &flags()).await.unwrap();

        assert!(ctx.item(&id).unwrap().completed);
        assert_eq!(ctx.board.total_completed(), 1);
    }

    #[tokio::test]
    async fn note_keystrokes_collapse_to_one_write() {
        let mut ctx = AppContext::in_memory(config(60_000)).await;
        let id = seed(&mut ctx, "call mom").await;
        ctx.input = LineInput::scripted([
            format!("note {id} a"),
            format!("note {id} ab"),
            format!("note {id} abc"),
        ]);

        run(&mut ctx, &flags()).await.unwrap();

        assert_eq!(ctx.item(&id).unwrap().notes.as_deref(), Some("abc"));
        let stored = ctx.store.get(&ctx.session, &id).await.unwrap();
        assert_eq!(stored.notes.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn command_after_note_flushes_first() {
        let mut ctx = AppContext::in_memory(config(60_000)).await;
        let id = seed(&mut ctx, "email").await;
        ctx.input = LineInput::scripted([format!("note {id} draft sent"), format!("done {id}")]);

        run(&mut ctx, &flags()).await.unwrap();

        let stored = ctx.store.get(&ctx.session, &id).await.unwrap();
        assert!(stored.completed);
        assert_eq!(stored.notes.as_deref(), Some("draft sent"));
    }

    #[tokio::test]
    async fn notes_on_two_items_both_survive_quit() {
        let mut ctx = AppContext::in_memory(config(60_000)).await;
        let a = seed(&mut ctx, "call mom").await;
        let b = seed(&mut ctx, "book dentist").await;
        ctx.input = LineInput::scripted([
            format!("note {a} ask about sunday"),
            format!("note {b} after 3pm"),
            "quit".to_string(),
        ]);

        run(&mut ctx, &flags()).await.unwrap();

        let stored_a = ctx.store.get(&ctx.session, &a).await.unwrap();
        let stored_b = ctx.store.get(&ctx.session, &b).await.unwrap();
        assert_eq!(stored_a.notes.as_deref(), Some("ask about sunday"));
        assert_eq!(stored_b.notes.as_deref(), Some("after 3pm"));
    }

    #[tokio::test]
    async fn story_navigation_carries_between_lines() {
        let mut ctx = AppContext::in_memory(config(500)).await;
        ctx.input = LineInput::scripted([
            "motivate story 2",
            "motivate story --next",
            "motivate story --next",
            "motivate story --prev",
        ]);

        run(&mut ctx, &flags()).await.unwrap();

        assert_eq!(ctx.last_story, Some(2));
    }
}
