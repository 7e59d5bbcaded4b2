//! Line-oriented terminal version of the match form.
//!
//! Each plain line replaces the input and submits it. A few words are
//! reserved as commands (`show`, `copy input`, `copy match`, `help`, `quit`).

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::cli::common::{print_comparison, render_color, runtime, CliContext, CliError, CliResult};
use crate::constants::APP_NAME;
use crate::services::{ConsoleNotifier, FixedMatcher, SystemClipboard};
use crate::session::MatchSession;
use clap::Args;

const COMMANDS_HELP: &str = "\
Commands:
  <hex>          Set the input and find the nearest match (e.g. #ff0000, f00)
  show           Show the current input and match
  copy input     Copy the normalized input to the clipboard
  copy match     Copy the matched hex to the clipboard
  help           Show this help
  quit           Leave";

/// Run the match form interactively in the terminal
#[derive(Debug, Clone, Args)]
pub struct InteractiveArgs {}

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Submit(&'a str),
    Show,
    CopyInput,
    CopyMatch,
    Help,
    Quit,
    Empty,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "show" => Self::Show,
            "copy input" | "copy original" => Self::CopyInput,
            "copy match" | "copy nearest" => Self::CopyMatch,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            // Submitted verbatim: surrounding whitespace makes a hex invalid
            _ => Self::Submit(line),
        }
    }
}

impl InteractiveArgs {
    /// Execute the interactive command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.load_config()?;
        let matcher = FixedMatcher::from_config(&config.matcher)?;
        let mut session =
            MatchSession::from_config(&config, Arc::new(matcher), Arc::new(ConsoleNotifier));
        let mut clipboard = SystemClipboard::new();
        let rt = runtime()?;
        let swatches = config.ui.swatches;

        println!("{APP_NAME}");
        println!("Enter a hex code to find the nearest named Pantone color.");
        println!("Type 'help' for commands.");
        show(&session, swatches);

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            io::stdout()
                .flush()
                .map_err(|e| CliError::io(format!("Failed to write prompt: {e}")))?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.map_err(|e| CliError::io(format!("Failed to read input: {e}")))?;

            // Failures are already reported by the notifier; the session keeps running
            match Command::parse(&line) {
                Command::Empty => {}
                Command::Quit => break,
                Command::Help => println!("{COMMANDS_HELP}"),
                Command::Show => show(&session, swatches),
                Command::CopyInput => {
                    let _ = session.copy_input(&mut clipboard);
                }
                Command::CopyMatch => {
                    let _ = session.copy_result(&mut clipboard);
                }
                Command::Submit(raw) => {
                    session.edit_input(raw);
                    println!("Finding...");
                    if let Ok(found) = rt.block_on(session.submit()) {
                        print_comparison(session.normalized_input().as_ref(), &found, swatches);
                    }
                }
            }
        }

        Ok(())
    }
}

fn show(session: &MatchSession, swatches: bool) {
    match session.normalized_input() {
        Some(color) => println!("Input     {}", render_color(&color, swatches)),
        None => println!("Input     {} (not a valid hex color)", session.input()),
    }
    if let Some(found) = session.result() {
        print_comparison(None, found, swatches);
    }
}
