//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use std::time::Duration;

use trove_foundation::{Error, ErrorContext, ErrorKind, Pattern};

#[test]
fn error_depth_exceeded() {
    let err = Error::depth_exceeded(100);
    assert!(matches!(err.kind, ErrorKind::DepthExceeded { limit: 100 }));
    assert_eq!(err.to_string(), "maximum depth (100) exceeded");
}

#[test]
fn error_with_source_context() {
    let err = Error::arity_mismatch("at least 2".into(), 0)
        .with_context(ErrorContext::new().with_source("deep_merge"));
    let msg = err.to_string();
    assert!(msg.contains("expected at least 2, got 0"));
    assert!(msg.contains("deep_merge"));
}

#[test]
fn frames_render_outermost_first() {
    let err = Error::depth_exceeded(3)
        .with_frame(".c")
        .with_frame("[0]")
        .with_frame(".a");
    assert_eq!(err.path(), ".a[0].c");
    assert!(err.to_string().contains(".a[0].c"));
}

#[test]
fn error_timeout() {
    let err = Error::timeout(Duration::from_secs(2));
    assert!(matches!(err.kind, ErrorKind::Timeout(_)));
    assert_eq!(err.path(), "");
}

#[test]
fn invalid_pattern_reports_source() {
    let err = Pattern::new("[a-", "").unwrap_err();
    assert!(err.to_string().starts_with("invalid pattern /[a-/"));
}
