//! Integration tests for parse state.

use ravel_combinator::Parse;
use ravel_foundation::{ErrorKind, Value};

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn start_covers_the_whole_input() {
    let state = Parse::start("123abc");
    assert_eq!(state.remaining(), "123abc");
    assert!(state.value().is_unit());
    assert!(!state.is_failed());
}

#[test]
fn states_are_values_not_shared_mutable_records() {
    let before = Parse::start("abc");
    let after = before.clone().fail();
    // Coercing a copy leaves the original untouched.
    assert!(!before.is_failed());
    assert!(after.is_failed());
}

// =============================================================================
// Result conversion
// =============================================================================

#[test]
fn into_result_surfaces_the_value() {
    let state = Parse::succeed("", Value::from("9"));
    assert_eq!(state.into_result().unwrap(), Value::Text("9"));
}

#[test]
fn into_result_reports_unconsumed_input() {
    let err = Parse::start("x9").fail().into_result().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ParseFailed { ref remaining } if remaining == "x9"
    ));
}
