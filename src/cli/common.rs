//! Shared CLI plumbing: errors, exit codes and terminal rendering helpers.

use crossterm::style::Stylize;
use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;
use crate::models::{ColorMatch, HexColor, RgbColor};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,
    /// Input was rejected.
    ValidationFailed = 1,
    /// File, config or clipboard I/O failed.
    IoError = 2,
    /// The match service failed or timed out.
    ServiceFailed = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with.
    pub exit_code: ExitCode,
    /// Message printed to stderr.
    pub message: String,
}

impl CliError {
    /// Input validation failure (exit 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// I/O, config or clipboard failure (exit 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Match service failure (exit 3).
    pub fn service(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ServiceFailed,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidFormat { .. } | Error::NoResult => Self::validation(err.to_string()),
            Error::ClipboardFailure(_) => Self::io(err.to_string()),
            Error::MatchServiceFailure(_) | Error::RequestPending => {
                Self::service(err.to_string())
            }
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Settings shared by every command, taken from global flags.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Explicit config file (`--config`); the platform file otherwise.
    pub config_path: Option<PathBuf>,
}

impl CliContext {
    /// Loads the configuration this invocation should use.
    pub fn load_config(&self) -> CliResult<Config> {
        let loaded = match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        loaded.map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
    }

    /// Writes the configuration back to where it was loaded from.
    pub fn save_config(&self, config: &Config) -> CliResult<()> {
        let saved = match &self.config_path {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        saved.map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
    }

    /// Human-readable location of the active config file.
    pub fn config_location(&self) -> String {
        match &self.config_path {
            Some(path) => path.display().to_string(),
            None => Config::config_file_path()
                .map_or_else(|_| "<unknown>".to_string(), |p| p.display().to_string()),
        }
    }
}

/// Renders a labelled color swatch, e.g. `[ #C8102E ]` on a red background.
pub fn swatch(color: &HexColor) -> String {
    let rgb = RgbColor::from(color);
    let label = format!("  {color}  ");
    let styled = label.on(rgb.to_crossterm_color());
    let styled = if rgb.is_light() {
        styled.black()
    } else {
        styled.white()
    };
    styled.to_string()
}

/// Renders a color for terminal output, with a swatch when enabled.
pub fn render_color(color: &HexColor, swatches: bool) -> String {
    if swatches {
        swatch(color)
    } else {
        color.to_string()
    }
}

/// Prints the original color next to its nearest match and the distance score.
pub fn print_comparison(original: Option<&HexColor>, found: &ColorMatch, swatches: bool) {
    println!();
    if let Some(original) = original {
        println!("Original  {}", render_color(original, swatches));
    }
    println!(
        "Nearest   {}  {}",
        render_color(&found.hex, swatches),
        found.name
    );
    println!();
    println!("Color Distance Score: {}", found.distance);
    println!("Lower scores indicate closer color matches");
}

/// Builds a current-thread runtime for commands that talk to the match service.
pub fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))
}
