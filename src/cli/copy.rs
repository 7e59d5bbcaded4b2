//! Copy the canonical form of a hex color to the system clipboard.

use std::sync::Arc;

use crate::cli::common::{CliContext, CliResult};
use crate::services::{ConsoleNotifier, FixedMatcher, SystemClipboard};
use crate::session::MatchSession;
use clap::Args;

/// Copy the canonical #RRGGBB form of a hex color to the clipboard
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// Hex color (#RGB or #RRGGBB; a missing '#' is added)
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,
}

impl CopyArgs {
    /// Execute the copy command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.load_config()?;
        // Copying never reaches the match service
        let matcher = FixedMatcher::from_config(&config.matcher)?;
        let mut session =
            MatchSession::from_config(&config, Arc::new(matcher), Arc::new(ConsoleNotifier));
        session.edit_input(&self.hex);

        let mut clipboard = SystemClipboard::new();
        session.copy_input(&mut clipboard)?;
        Ok(())
    }
}
