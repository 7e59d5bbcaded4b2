//! Configuration management CLI commands.

use crate::cli::common::{CliContext, CliError, CliResult};
use crate::config::Config;
use crate::models::is_valid_hex;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSetArgs {
    /// Simulated match service latency in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Match request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Web server bind address
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Input a new session starts with
    #[arg(long, value_name = "HEX", allow_hyphen_values = true)]
    default_input: Option<String>,

    /// Render colored swatches in terminal output (true or false)
    #[arg(long, value_name = "BOOL")]
    swatches: Option<bool>,
}

/// JSON output of `config show`.
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(ctx),
            ConfigCommand::Set(args) => args.execute(ctx),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.load_config()?;

        if self.json {
            output_json(ctx, &config)?;
        } else {
            output_human_readable(ctx, &config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.delay_ms.is_none()
            && self.timeout_ms.is_none()
            && self.port.is_none()
            && self.host.is_none()
            && self.default_input.is_none()
            && self.swatches.is_none()
    }

    /// Applies the given options to `config`, rejecting invalid values.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(delay_ms) = self.delay_ms {
            config.matcher.delay_ms = delay_ms;
        }

        if let Some(timeout_ms) = self.timeout_ms {
            if timeout_ms == 0 {
                return Err(CliError::validation(
                    "Timeout must be greater than zero milliseconds",
                ));
            }
            config.matcher.timeout_ms = timeout_ms;
        }

        if let Some(port) = self.port {
            config.web.port = port;
        }

        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(CliError::validation("Host must not be empty"));
            }
            config.web.host.clone_from(host);
        }

        if let Some(input) = &self.default_input {
            // Only the prefix is required; a session may start on an incomplete value
            if !input.starts_with('#') {
                return Err(CliError::validation(format!(
                    "Default input must start with '#', got '{input}'"
                )));
            }
            if !is_valid_hex(input) {
                tracing::warn!(input = %input, "default input is not a complete hex color");
            }
            config.ui.default_input.clone_from(input);
        }

        if let Some(swatches) = self.swatches {
            config.ui.swatches = swatches;
        }

        Ok(())
    }

    /// Execute set command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(concat!(
                "At least one configuration option must be specified: ",
                "--delay-ms, --timeout-ms, --port, --host, --default-input, or --swatches",
            )));
        }

        let mut config = ctx.load_config()?;
        self.apply(&mut config)?;
        ctx.save_config(&config)?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(ctx: &CliContext, config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: ctx.config_location(),
        config,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(ctx: &CliContext, config: &Config) {
    println!("Color Nearest Match Configuration");
    println!("=================================");
    println!("File: {}", ctx.config_location());
    println!();

    println!("Matcher:");
    println!("  Name:     {}", config.matcher.name);
    println!("  Hex:      {}", config.matcher.hex);
    println!("  Distance: {}", config.matcher.distance);
    println!("  Delay:    {} ms", config.matcher.delay_ms);
    println!("  Timeout:  {} ms", config.matcher.timeout_ms);
    println!();

    println!("Web:");
    println!("  Address:  {}:{}", config.web.host, config.web.port);
    println!();

    println!("UI:");
    println!("  Default Input: {}", config.ui.default_input);
    println!(
        "  Swatches:      {}",
        if config.ui.swatches { "on" } else { "off" }
    );
    println!();
}
