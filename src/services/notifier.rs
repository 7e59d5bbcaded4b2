//! User-facing notification channel.
//!
//! Every validation failure, match success or failure, and copy success or
//! failure produces exactly one [`Notification`].

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;
use serde::Serialize;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Success or neutral information.
    Info,
    /// A failure the user should act on.
    Destructive,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Headline, e.g. "Copied!".
    pub title: String,
    /// One-sentence detail.
    pub description: String,
    /// Info or destructive.
    pub variant: Variant,
    /// When the notification was raised.
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Creates an informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_variant(title, description, Variant::Info)
    }

    /// Creates a destructive (failure) notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_variant(title, description, Variant::Destructive)
    }

    fn with_variant(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: Variant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
            timestamp: Utc::now(),
        }
    }

    /// Whether this reports a failure.
    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Receives notifications raised by a session.
pub trait Notifier: Send + Sync {
    /// Presents one notification.
    fn notify(&self, notification: Notification);
}

/// Prints notifications to the terminal: info to stdout, failures to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            eprintln!(
                "{} {}",
                format!("✗ {}", notification.title).red().bold(),
                notification.description
            );
        } else {
            println!(
                "{} {}",
                format!("✓ {}", notification.title).green().bold(),
                notification.description
            );
        }
    }
}

/// Keeps notifications in memory until drained.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Number of notifications waiting to be drained.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Whether nothing is waiting to be drained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
