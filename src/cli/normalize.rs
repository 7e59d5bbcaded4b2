//! Print the canonical #RRGGBB form of a hex color.

use crate::cli::common::{CliError, CliResult};
use crate::models::{coerce_prefix, HexColor};
use clap::Args;
use serde::Serialize;

/// Print the canonical uppercase #RRGGBB form of a hex color
#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    /// Hex color (#RGB or #RRGGBB; a missing '#' is added)
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NormalizeOutput<'a> {
    input: &'a str,
    hex: &'a HexColor,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> CliResult<()> {
        let color = HexColor::parse(&coerce_prefix(&self.hex))?;

        if self.json {
            let output = NormalizeOutput {
                input: &self.hex,
                hex: &color,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{color}");
        }

        Ok(())
    }
}
