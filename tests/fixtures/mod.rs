//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Notify;

use hexmatch::config::Config;
use hexmatch::models::{ColorMatch, HexColor};
use hexmatch::services::{ClipboardService, ColorMatcher};
use hexmatch::{Error, Result};

/// The match every fixture matcher answers with.
pub fn pantone_red() -> ColorMatch {
    ColorMatch::new(
        "PANTONE 18-1763 TPX Red",
        HexColor::parse("#C8102E").unwrap(),
        12.5,
    )
}

/// A second, distinguishable match.
pub fn pantone_blue() -> ColorMatch {
    ColorMatch::new(
        "PANTONE 19-4052 TCX Classic Blue",
        HexColor::parse("#0F4C81").unwrap(),
        3.25,
    )
}

/// Default config with no simulated latency and plain terminal output.
pub fn test_config() -> Config {
    let mut config = Config::new();
    config.matcher.delay_ms = 0;
    config.ui.swatches = false;
    config
}

/// Writes `config` to a fresh temp dir and returns its path.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn write_temp_config(config: &Config) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    config.save_to(&path).expect("Failed to write config");
    (path, temp_dir)
}

/// Matcher that counts calls and answers with a fixed outcome.
pub struct CountingMatcher {
    calls: AtomicUsize,
    response: Result<ColorMatch>,
}

impl CountingMatcher {
    pub fn answering(response: ColorMatch) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Ok(response),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Err(Error::MatchServiceFailure(reason.to_string())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ColorMatcher for CountingMatcher {
    async fn find_nearest(&self, _color: &HexColor) -> Result<ColorMatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Matcher that holds every request until the test releases it.
pub struct GatedMatcher {
    /// Signalled when a request reaches the matcher.
    pub entered: Notify,
    /// Signal to let one request complete.
    pub release: Notify,
    response: ColorMatch,
}

impl GatedMatcher {
    pub fn new(response: ColorMatch) -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            response,
        }
    }
}

#[async_trait]
impl ColorMatcher for GatedMatcher {
    async fn find_nearest(&self, _color: &HexColor) -> Result<ColorMatch> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.response.clone())
    }
}

/// Matcher whose answer does not form a valid match.
pub struct MalformedMatcher;

#[async_trait]
impl ColorMatcher for MalformedMatcher {
    async fn find_nearest(&self, _color: &HexColor) -> Result<ColorMatch> {
        Ok(ColorMatch::new(
            "Broken",
            HexColor::parse("#000").unwrap(),
            f64::NAN,
        ))
    }
}

/// Matcher answering with queued outcomes, one per request.
pub struct SequenceMatcher {
    outcomes: Mutex<VecDeque<Result<ColorMatch>>>,
}

impl SequenceMatcher {
    pub fn new(outcomes: impl IntoIterator<Item = Result<ColorMatch>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ColorMatcher for SequenceMatcher {
    async fn find_nearest(&self, _color: &HexColor) -> Result<ColorMatch> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::MatchServiceFailure("no queued outcome".to_string())))
    }
}

/// In-memory clipboard recording every write.
#[derive(Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardService for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::ClipboardFailure("clipboard unavailable".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
