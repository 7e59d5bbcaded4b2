//! Integration tests for the match and copy flows of a session.

use std::sync::Arc;
use std::time::Duration;

use hexmatch::services::{FixedMatcher, RecordingNotifier, Variant};
use hexmatch::session::MatchSession;
use hexmatch::Error;

mod fixtures;
use fixtures::*;

fn session_with(
    matcher: Arc<dyn hexmatch::services::ColorMatcher>,
) -> (MatchSession, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let session = MatchSession::from_config(&test_config(), matcher, notifier.clone());
    (session, notifier)
}

// ============================================================================
// Match Flow Tests
// ============================================================================

#[tokio::test]
async fn test_submit_valid_input_replaces_result() {
    let matcher = Arc::new(CountingMatcher::answering(pantone_red()));
    let (mut session, notifier) = session_with(matcher.clone());

    session.edit_input("f00");
    let found = session.submit().await.unwrap();

    assert_eq!(found, pantone_red());
    assert_eq!(session.result(), Some(&pantone_red()));
    assert!(!session.is_loading());
    assert_eq!(matcher.calls(), 1);

    let notes = notifier.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Color match found!");
    assert_eq!(
        notes[0].description,
        "Found nearest Pantone color: PANTONE 18-1763 TPX Red"
    );
    assert_eq!(notes[0].variant, Variant::Info);
}

#[tokio::test]
async fn test_submit_invalid_input_never_calls_service() {
    let matcher = Arc::new(CountingMatcher::answering(pantone_red()));
    let (mut session, notifier) = session_with(matcher.clone());
    let before = session.result().cloned();

    session.edit_input("#zzzzzz");
    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, Error::InvalidFormat { .. }));
    assert_eq!(matcher.calls(), 0);
    assert_eq!(session.result().cloned(), before);

    let notes = notifier.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Invalid hex code");
    assert!(notes[0].is_destructive());
}

#[tokio::test]
async fn test_service_failure_keeps_previous_result() {
    let matcher = Arc::new(SequenceMatcher::new([
        Ok(pantone_blue()),
        Err(Error::MatchServiceFailure("upstream unavailable".to_string())),
    ]));
    let (mut session, notifier) = session_with(matcher);

    session.edit_input("#0f4c81");
    session.submit().await.unwrap();
    notifier.drain();

    session.edit_input("#123456");
    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, Error::MatchServiceFailure(_)));
    assert!(!session.is_loading());
    assert_eq!(session.result(), Some(&pantone_blue()));
    assert_eq!(session.input(), "#123456");

    let notes = notifier.drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Error");
    assert_eq!(
        notes[0].description,
        "Failed to find nearest color. Please try again."
    );
}

#[tokio::test]
async fn test_malformed_response_is_a_service_failure() {
    let (mut session, notifier) = session_with(Arc::new(MalformedMatcher));

    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, Error::MatchServiceFailure(_)));
    assert_eq!(session.result().map(|m| m.name.as_str()), Some("Red"));
    assert_eq!(notifier.drain()[0].title, "Error");
}

#[tokio::test(start_paused = true)]
async fn test_slow_service_times_out() {
    let slow = FixedMatcher::new(pantone_red(), Duration::from_secs(30));
    let notifier = Arc::new(RecordingNotifier::new());
    let mut session = MatchSession::new(Arc::new(slow), notifier.clone())
        .with_timeout(Duration::from_millis(500));

    let err = session.submit().await.unwrap_err();

    assert_eq!(
        err,
        Error::MatchServiceFailure("request timed out after 500 ms".to_string())
    );
    assert!(!session.is_loading());
    assert_eq!(notifier.drain()[0].title, "Error");
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let matcher = Arc::new(CountingMatcher::answering(pantone_red()));
    let (mut session, notifier) = session_with(matcher.clone());

    let pending = session.begin_match().unwrap();
    assert!(session.is_loading());

    let err = session.begin_match().unwrap_err();
    assert_eq!(err, Error::RequestPending);
    assert_eq!(notifier.drain()[0].title, "Match in progress");

    session.finish_match(pending, Ok(pantone_blue())).unwrap();
    assert!(!session.is_loading());
    assert_eq!(session.result(), Some(&pantone_blue()));
    assert_eq!(matcher.calls(), 0);
}

// ============================================================================
// Copy Flow Tests
// ============================================================================

#[test]
fn test_copy_input_writes_canonical_form() {
    let (mut session, notifier) = session_with(Arc::new(CountingMatcher::answering(pantone_red())));
    let mut clipboard = MemoryClipboard::default();

    session.edit_input("abc");
    session.copy_input(&mut clipboard).unwrap();

    assert_eq!(clipboard.last(), Some("#AABBCC"));
    let notes = notifier.drain();
    assert_eq!(notes[0].title, "Copied!");
    assert_eq!(notes[0].description, "#AABBCC copied to clipboard");
}

#[test]
fn test_copy_failure_notifies_and_keeps_state() {
    let (session, notifier) = session_with(Arc::new(CountingMatcher::answering(pantone_red())));
    let mut clipboard = MemoryClipboard::failing();
    let before = session.state().clone();

    let err = session.copy_result(&mut clipboard).unwrap_err();

    assert!(matches!(err, Error::ClipboardFailure(_)));
    assert_eq!(session.state(), &before);
    let notes = notifier.drain();
    assert_eq!(notes[0].title, "Copy failed");
    assert_eq!(notes[0].description, "Unable to copy to clipboard");
}

#[tokio::test]
async fn test_copy_result_after_match() {
    let (mut session, notifier) =
        session_with(Arc::new(CountingMatcher::answering(pantone_blue())));
    let mut clipboard = MemoryClipboard::default();

    session.edit_input("#0F4C81");
    session.submit().await.unwrap();
    notifier.drain();

    session.copy_result(&mut clipboard).unwrap();
    assert_eq!(clipboard.last(), Some("#0F4C81"));
    assert_eq!(
        notifier.drain()[0].description,
        "#0F4C81 copied to clipboard"
    );
}
