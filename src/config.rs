//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_INPUT, DEFAULT_MATCH_DELAY_MS, DEFAULT_MATCH_TIMEOUT_MS,
    DEFAULT_WEB_HOST, DEFAULT_WEB_PORT, PLACEHOLDER_MATCH_DISTANCE,
    PLACEHOLDER_MATCH_HEX, PLACEHOLDER_MATCH_NAME,
};
use crate::models::is_valid_hex;

/// Match service configuration.
///
/// The fixed matcher answers every request with `name`/`hex`/`distance`
/// after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Name of the answered reference color
    pub name: String,
    /// Hex of the answered reference color (#RGB or #RRGGBB)
    pub hex: String,
    /// Distance score of the answered match
    pub distance: f64,
    /// Simulated service latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_MATCH_DELAY_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_MATCH_TIMEOUT_MS
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_MATCH_NAME.to_string(),
            hex: PLACEHOLDER_MATCH_HEX.to_string(),
            distance: PLACEHOLDER_MATCH_DISTANCE,
            delay_ms: default_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl MatcherConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_WEB_HOST.to_string(),
            port: DEFAULT_WEB_PORT,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input text a new session starts with
    #[serde(default = "default_input")]
    pub default_input: String,
    /// Render colored swatches in terminal output
    #[serde(default = "default_swatches")]
    pub swatches: bool,
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_swatches() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_input: default_input(),
            swatches: default_swatches(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ColorNearestMatch/config.toml`
/// - macOS: `~/Library/Application Support/ColorNearestMatch/config.toml`
/// - Windows: `%APPDATA%\ColorNearestMatch\config.toml`
///
/// # Validation
///
/// - `matcher.hex` must be a valid hex color
/// - `matcher.distance` must be finite and non-negative
/// - `matcher.timeout_ms` must be greater than zero
/// - `ui.default_input` must start with `#`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Match service settings
    #[serde(default)]
    pub matcher: MatcherConfig,
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_hex(&self.matcher.hex) {
            anyhow::bail!(
                "matcher.hex is not a valid hex color: '{}' (expected #RGB or #RRGGBB)",
                self.matcher.hex
            );
        }

        if !self.matcher.distance.is_finite() || self.matcher.distance < 0.0 {
            anyhow::bail!(
                "matcher.distance must be a non-negative number, got {}",
                self.matcher.distance
            );
        }

        if self.matcher.timeout_ms == 0 {
            anyhow::bail!("matcher.timeout_ms must be greater than zero");
        }

        if !self.ui.default_input.starts_with('#') {
            anyhow::bail!(
                "ui.default_input must start with '#', got '{}'",
                self.ui.default_input
            );
        }

        Ok(())
    }
}
