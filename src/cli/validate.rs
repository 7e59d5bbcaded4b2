//! Validation command for hex color codes.

use crate::cli::common::{CliError, CliResult};
use crate::models::{coerce_prefix, is_valid_hex, normalize_hex};
use clap::Args;
use serde::Serialize;

/// Check whether a value is a valid #RGB or #RRGGBB hex color
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Hex color to check (quote it so the shell keeps the '#')
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,

    /// Add a missing leading '#' before checking
    #[arg(long)]
    pub coerce: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output of the validate command.
#[derive(Debug, Serialize)]
struct ValidateOutput {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let input = if self.coerce {
            coerce_prefix(&self.hex)
        } else {
            self.hex.clone()
        };

        let valid = is_valid_hex(&input);
        let output = ValidateOutput {
            normalized: normalize_hex(&input).ok(),
            input,
            valid,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(normalized) = &output.normalized {
            println!("✓ {} is a valid hex color ({})", output.input, normalized);
        } else {
            println!(
                "✗ {} is not a valid hex color (expected #RGB or #RRGGBB)",
                output.input
            );
        }

        if !output.valid {
            return Err(CliError::validation(format!(
                "Invalid hex color: {}",
                output.input
            )));
        }

        Ok(())
    }
}
