//! Nearest-color match service.
//!
//! The match service is an injected collaborator. The crate ships a
//! fixed-response implementation; real services implement [`ColorMatcher`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::MatcherConfig;
use crate::error::{Error, Result};
use crate::models::{ColorMatch, HexColor};

/// Finds the closest named reference color for a canonical hex color.
#[async_trait]
pub trait ColorMatcher: Send + Sync {
    /// Looks up the nearest reference color.
    ///
    /// Implementations report failures as [`Error::MatchServiceFailure`].
    async fn find_nearest(&self, color: &HexColor) -> Result<ColorMatch>;
}

/// Matcher that always answers with the same configured match after a
/// simulated delay.
#[derive(Debug, Clone)]
pub struct FixedMatcher {
    response: ColorMatch,
    delay: Duration,
}

impl FixedMatcher {
    /// Creates a matcher answering `response` after `delay`.
    pub fn new(response: ColorMatch, delay: Duration) -> Self {
        Self { response, delay }
    }

    /// Builds the matcher from the `[matcher]` config section.
    pub fn from_config(config: &MatcherConfig) -> Result<Self> {
        let hex = HexColor::parse(&config.hex)?;
        Ok(Self::new(
            ColorMatch::new(config.name.clone(), hex, config.distance),
            Duration::from_millis(config.delay_ms),
        ))
    }

    /// The match this matcher answers with.
    pub fn response(&self) -> &ColorMatch {
        &self.response
    }
}

#[async_trait]
impl ColorMatcher for FixedMatcher {
    async fn find_nearest(&self, color: &HexColor) -> Result<ColorMatch> {
        debug!(%color, delay = ?self.delay, "fixed matcher request");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.response.clone())
    }
}

/// Runs one request/response exchange with the match service.
///
/// An elapsed `timeout` or a malformed response is reported as
/// [`Error::MatchServiceFailure`].
pub async fn find_with_timeout(
    matcher: &dyn ColorMatcher,
    color: &HexColor,
    timeout: Duration,
) -> Result<ColorMatch> {
    let outcome = match tokio::time::timeout(timeout, matcher.find_nearest(color)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(%color, ?timeout, "match service timed out");
            return Err(Error::MatchServiceFailure(format!(
                "request timed out after {} ms",
                timeout.as_millis()
            )));
        }
    };

    let found = outcome.map_err(|e| match e {
        Error::MatchServiceFailure(_) => e,
        other => Error::MatchServiceFailure(other.to_string()),
    })?;
    found.validate()?;
    Ok(found)
}
