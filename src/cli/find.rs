//! Find the nearest named color for a hex code.

use std::sync::Arc;

use crate::cli::common::{print_comparison, runtime, CliContext, CliError, CliResult};
use crate::models::ColorMatch;
use crate::services::{
    find_with_timeout, ColorMatcher, ConsoleNotifier, FixedMatcher, Notification, Notifier,
    RecordingNotifier, SystemClipboard,
};
use crate::session::MatchSession;
use clap::Args;
use serde::Serialize;

/// Find the nearest named Pantone color for a hex code
#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    /// Hex color (#RGB or #RRGGBB; a missing '#' is added)
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,

    /// Copy the matched hex to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the match command.
#[derive(Debug, Serialize)]
struct MatchOutput<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    original: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    found: Option<&'a ColorMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    notifications: Vec<Notification>,
}

impl MatchArgs {
    /// Execute the match command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.load_config()?;
        let matcher: Arc<dyn ColorMatcher> = Arc::new(
            FixedMatcher::from_config(&config.matcher)
                .map_err(|e| CliError::io(format!("Invalid matcher configuration: {e}")))?,
        );

        let recorder = Arc::new(RecordingNotifier::new());
        let notifier: Arc<dyn Notifier> = if self.json {
            recorder.clone()
        } else {
            Arc::new(ConsoleNotifier)
        };

        let mut session = MatchSession::from_config(&config, matcher, notifier);
        session.edit_input(&self.hex);

        let outcome = match session.begin_match() {
            Ok(pending) => {
                if !self.json {
                    eprintln!("Finding nearest color for {}...", pending.color());
                }
                let rt = runtime()?;
                let matcher = session.matcher();
                let found = rt.block_on(find_with_timeout(
                    matcher.as_ref(),
                    pending.color(),
                    session.timeout(),
                ));
                session.finish_match(pending, found)
            }
            Err(e) => Err(e),
        };

        let copied = if self.copy && outcome.is_ok() {
            let mut clipboard = SystemClipboard::new();
            session.copy_result(&mut clipboard)
        } else {
            Ok(())
        };

        if self.json {
            let output = MatchOutput {
                input: session.input(),
                original: session.normalized_input().map(String::from),
                found: outcome.as_ref().ok(),
                error: outcome.as_ref().err().map(ToString::to_string),
                notifications: recorder.drain(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Ok(found) = &outcome {
            print_comparison(
                session.normalized_input().as_ref(),
                found,
                config.ui.swatches,
            );
        }

        outcome?;
        copied?;
        Ok(())
    }
}
