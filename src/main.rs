//! Color Nearest Match - find the nearest named Pantone color for a hex code
//!
//! Validates and normalizes hex color input, asks the match service for the
//! closest reference color and shows the two side by side.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexmatch::cli::{
    CliContext, CliResult, ConfigArgs, CopyArgs, InteractiveArgs, MatchArgs, NormalizeArgs,
    ValidateArgs,
};
use hexmatch::constants::APP_BINARY_NAME;

/// Color Nearest Match - find the nearest named Pantone color for a hex code
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Use this config file instead of the platform default
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a value is a valid hex color
    Validate(ValidateArgs),
    /// Print the canonical #RRGGBB form of a hex color
    Normalize(NormalizeArgs),
    /// Find the nearest named Pantone color
    Match(MatchArgs),
    /// Copy the canonical form of a hex color to the clipboard
    Copy(CopyArgs),
    /// Run the match form interactively
    Interactive(InteractiveArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match self {
            Self::Validate(args) => args.execute(),
            Self::Normalize(args) => args.execute(),
            Self::Match(args) => args.execute(ctx),
            Self::Copy(args) => args.execute(ctx),
            Self::Interactive(args) => args.execute(ctx),
            Self::Config(args) => args.execute(ctx),
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so command output stays machine-readable
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CliContext {
        config_path: cli.config,
    };

    if let Err(err) = cli.command.execute(&ctx) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
