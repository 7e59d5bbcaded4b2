//! Error taxonomy for the match and copy flows.
//!
//! Every variant is recoverable: callers report it through the notification
//! channel and keep the session running.

/// Errors raised while validating input, talking to the match service or
/// writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Raw input is not `#RGB` or `#RRGGBB`.
    #[error("invalid hex color format: '{input}' (expected #RGB or #RRGGBB)")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },

    /// The match service failed, timed out or returned a malformed match.
    #[error("match service failure: {0}")]
    MatchServiceFailure(String),

    /// The clipboard rejected the write (permissions, no display, ...).
    #[error("clipboard failure: {0}")]
    ClipboardFailure(String),

    /// A match request is already in flight for this session.
    #[error("a match request is already pending")]
    RequestPending,

    /// There is no match result to act on yet.
    #[error("no match result available")]
    NoResult,
}

impl Error {
    /// Builds an [`Error::InvalidFormat`] for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}

/// Result alias used by the core library.
pub type Result<T> = std::result::Result<T, Error>;
