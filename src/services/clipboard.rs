//! Clipboard access for copying color codes.

use tracing::debug;

use crate::error::{Error, Result};

/// Destination for copied text.
pub trait ClipboardService {
    /// Replaces the clipboard contents with `text`.
    ///
    /// Failures are reported as [`Error::ClipboardFailure`] and must not be
    /// swallowed by callers.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
///
/// The handle is opened lazily so hosts without a display only fail when a
/// copy is actually attempted.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a clipboard handle that connects on first use.
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| Error::ClipboardFailure(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::ClipboardFailure("clipboard unavailable".to_string()))
    }
}

impl ClipboardService for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        debug!(text, "writing to system clipboard");
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|e| Error::ClipboardFailure(e.to_string()))
    }
}
