//! Integration tests for the error types.
//!
//! Construction-time misuse and failed-parse conversion both surface as
//! `ravel_foundation::Error`; runtime match failure never does.

use ravel_foundation::{Error, ErrorKind};

// =============================================================================
// Construction errors
// =============================================================================

#[test]
fn empty_sequence_kind() {
    let err = Error::empty_sequence();
    assert!(matches!(err.kind, ErrorKind::EmptySequence));
}

#[test]
fn empty_alternation_kind() {
    let err = Error::empty_alternation();
    assert!(matches!(err.kind, ErrorKind::EmptyAlternation));
}

#[test]
fn invalid_pattern_carries_pattern_and_message() {
    let err = Error::invalid_pattern("(unclosed", "missing closing parenthesis");
    match err.kind {
        ErrorKind::InvalidPattern { pattern, message } => {
            assert_eq!(pattern, "(unclosed");
            assert!(message.contains("parenthesis"));
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn errors_render_their_kind() {
    let msg = format!("{}", Error::parse_failed("rest"));
    assert!(msg.contains("rest"));
    assert!(msg.contains("unconsumed"));
}
