//! Interactive match session.
//!
//! A session owns the state a form UI would keep: the current input text,
//! whether a match request is in flight, and the last match shown. Every
//! outcome of the match and copy flows is reported through the session's
//! [`Notifier`].
//!
//! Only one match request may be pending per session. A second submission
//! while one is in flight is rejected with [`Error::RequestPending`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::{
    messages, DEFAULT_INPUT, DEFAULT_MATCH_TIMEOUT_MS, INITIAL_MATCH_HEX, INITIAL_MATCH_NAME,
};
use crate::error::{Error, Result};
use crate::models::{coerce_prefix, ColorMatch, HexColor};
use crate::services::{find_with_timeout, ClipboardService, ColorMatcher, Notification, Notifier};

/// Snapshot of what the UI displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    /// Editable input text, always `#`-prefixed.
    pub input: String,
    /// Whether a match request is in flight.
    pub loading: bool,
    /// Last successful match, if any.
    pub result: Option<ColorMatch>,
}

impl SessionState {
    fn initial(input: &str) -> Self {
        Self {
            input: input.to_string(),
            loading: false,
            result: HexColor::parse(INITIAL_MATCH_HEX)
                .ok()
                .map(|hex| ColorMatch::new(INITIAL_MATCH_NAME, hex, 0.0)),
        }
    }
}

/// Ticket for a match request started with [`MatchSession::begin_match`].
#[derive(Debug)]
#[must_use = "a pending match must be completed with finish_match"]
pub struct PendingMatch {
    color: HexColor,
}

impl PendingMatch {
    /// Canonical color to send to the match service.
    pub fn color(&self) -> &HexColor {
        &self.color
    }
}

/// Clears the loading flag if a request is abandoned before it finishes.
struct LoadingReset<'a> {
    loading: Option<&'a mut bool>,
}

impl LoadingReset<'_> {
    fn disarm(mut self) {
        self.loading = None;
    }
}

impl Drop for LoadingReset<'_> {
    fn drop(&mut self) {
        if let Some(loading) = self.loading.take() {
            debug!("match request abandoned before completion");
            *loading = false;
        }
    }
}

/// One interactive session: state record plus injected collaborators.
pub struct MatchSession {
    state: SessionState,
    matcher: Arc<dyn ColorMatcher>,
    notifier: Arc<dyn Notifier>,
    timeout: Duration,
}

impl MatchSession {
    /// Creates a session with the default input and initial result.
    pub fn new(matcher: Arc<dyn ColorMatcher>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: SessionState::initial(DEFAULT_INPUT),
            matcher,
            notifier,
            timeout: Duration::from_millis(DEFAULT_MATCH_TIMEOUT_MS),
        }
    }

    /// Creates a session using the configured default input and timeout.
    pub fn from_config(
        config: &Config,
        matcher: Arc<dyn ColorMatcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mut session = Self::new(matcher, notifier).with_timeout(config.matcher.timeout());
        session.state.input = config.ui.default_input.clone();
        session
    }

    /// Overrides the match request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.state.input
    }

    /// Whether a match request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Last successful match, if any.
    pub fn result(&self) -> Option<&ColorMatch> {
        self.state.result.as_ref()
    }

    /// Full state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Match request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Shared handle to the match service.
    pub fn matcher(&self) -> Arc<dyn ColorMatcher> {
        Arc::clone(&self.matcher)
    }

    /// Canonical form of the input, if it is currently valid.
    pub fn normalized_input(&self) -> Option<HexColor> {
        HexColor::parse(&self.state.input).ok()
    }

    /// Applies an edit to the input text.
    ///
    /// The text gets a `#` prefix if it lacks one. No validation happens
    /// here; over-long or garbage input is kept as typed and rejected on
    /// submit.
    pub fn edit_input(&mut self, raw: &str) -> &str {
        self.state.input = coerce_prefix(raw);
        &self.state.input
    }

    /// Starts a match request for the current input.
    ///
    /// Fails with [`Error::RequestPending`] if a request is in flight and
    /// with [`Error::InvalidFormat`] if the input is not a hex color. Both
    /// failures are notified and leave the state untouched.
    pub fn begin_match(&mut self) -> Result<PendingMatch> {
        if self.state.loading {
            warn!(input = %self.state.input, "match submitted while another is pending");
            self.notify(Notification::destructive(
                messages::PENDING_TITLE,
                messages::PENDING_DESCRIPTION,
            ));
            return Err(Error::RequestPending);
        }

        let color = match HexColor::parse(&self.state.input) {
            Ok(color) => color,
            Err(e) => {
                debug!(input = %self.state.input, "rejected invalid hex input");
                self.notify(Notification::destructive(
                    messages::INVALID_TITLE,
                    messages::INVALID_DESCRIPTION,
                ));
                return Err(e);
            }
        };

        self.state.loading = true;
        debug!(%color, "match request started");
        Ok(PendingMatch { color })
    }

    /// Completes a match request started with [`Self::begin_match`].
    ///
    /// On success the result is replaced wholesale. On failure the previous
    /// result stays visible. Either way the outcome is notified.
    pub fn finish_match(
        &mut self,
        pending: PendingMatch,
        outcome: Result<ColorMatch>,
    ) -> Result<ColorMatch> {
        self.state.loading = false;

        match outcome {
            Ok(found) => {
                info!(
                    query = %pending.color,
                    name = %found.name,
                    hex = %found.hex,
                    distance = found.distance,
                    "nearest color found"
                );
                self.notify(Notification::info(
                    messages::MATCH_FOUND_TITLE,
                    format!("Found nearest Pantone color: {}", found.name),
                ));
                self.state.result = Some(found.clone());
                Ok(found)
            }
            Err(e) => {
                warn!(query = %pending.color, error = %e, "nearest color lookup failed");
                self.notify(Notification::destructive(
                    messages::MATCH_FAILED_TITLE,
                    messages::MATCH_FAILED_DESCRIPTION,
                ));
                Err(e)
            }
        }
    }

    /// Validates the input and runs one match request to completion.
    ///
    /// Dropping the returned future mid-request clears `loading` and keeps
    /// the previous result.
    pub async fn submit(&mut self) -> Result<ColorMatch> {
        let pending = self.begin_match()?;
        let matcher = Arc::clone(&self.matcher);
        let reset = LoadingReset {
            loading: Some(&mut self.state.loading),
        };
        let outcome = find_with_timeout(matcher.as_ref(), pending.color(), self.timeout).await;
        reset.disarm();
        self.finish_match(pending, outcome)
    }

    /// Copies the canonical form of the input.
    ///
    /// Invalid input is notified and nothing is copied.
    pub fn copy_input(&self, clipboard: &mut dyn ClipboardService) -> Result<()> {
        match self.normalized_input() {
            Some(color) => self.copy_text(clipboard, color.as_str()),
            None => {
                self.notify(Notification::destructive(
                    messages::INVALID_TITLE,
                    messages::INVALID_DESCRIPTION,
                ));
                Err(Error::invalid_format(&self.state.input))
            }
        }
    }

    /// Copies the hex of the current match.
    pub fn copy_result(&self, clipboard: &mut dyn ClipboardService) -> Result<()> {
        match &self.state.result {
            Some(found) => self.copy_text(clipboard, found.hex.as_str()),
            None => {
                self.notify(Notification::destructive(
                    messages::NO_RESULT_TITLE,
                    messages::NO_RESULT_DESCRIPTION,
                ));
                Err(Error::NoResult)
            }
        }
    }

    /// Copies `text` and notifies the outcome. Color state is never touched.
    pub fn copy_text(&self, clipboard: &mut dyn ClipboardService, text: &str) -> Result<()> {
        match clipboard.set_text(text) {
            Ok(()) => {
                self.notify(Notification::info(
                    messages::COPIED_TITLE,
                    format!("{text} copied to clipboard"),
                ));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                self.notify(Notification::destructive(
                    messages::COPY_FAILED_TITLE,
                    messages::COPY_FAILED_DESCRIPTION,
                ));
                Err(e)
            }
        }
    }

    fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}
