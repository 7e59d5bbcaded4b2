//! Service layer for external collaborators.
//!
//! The match service, clipboard and notification channel are all injected
//! behind traits so sessions can be driven by real or in-memory backends.

pub mod clipboard;
pub mod matcher;
pub mod notifier;

// Re-export commonly used types and functions
pub use clipboard::{ClipboardService, SystemClipboard};
pub use matcher::{find_with_timeout, ColorMatcher, FixedMatcher};
pub use notifier::{ConsoleNotifier, Notification, Notifier, RecordingNotifier, Variant};
