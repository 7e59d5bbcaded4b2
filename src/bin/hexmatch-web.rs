//! Color Nearest Match Web Server Binary
//!
//! This binary starts the web server that exposes hex validation and the
//! nearest-color match sessions as a REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured address (127.0.0.1:3001 by default)
//! hexmatch-web
//!
//! # Override the address and config file
//! hexmatch-web --host 0.0.0.0 --port 8080 --config ./hexmatch.toml
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hexmatch::config::Config;
use hexmatch::web;

/// Color Nearest Match Web Server - REST API for the match form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to `web.port` from the config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to `web.host` from the config)
    #[arg(long)]
    host: Option<String>,

    /// Config file to use instead of the platform default:
    /// - Linux: ~/.config/ColorNearestMatch/config.toml
    /// - macOS: ~/Library/Application Support/ColorNearestMatch/config.toml
    /// - Windows: %APPDATA%\ColorNearestMatch\config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    info!(
        matcher = %config.matcher.name,
        delay_ms = config.matcher.delay_ms,
        timeout_ms = config.matcher.timeout_ms,
        "configuration loaded"
    );

    let host = args.host.unwrap_or_else(|| config.web.host.clone());
    let port = args.port.unwrap_or(config.web.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context(format!("Invalid listen address: {host}:{port}"))?;

    web::run_server(config, addr).await
}
