//! Integration tests for the structural combinators.

use ravel_combinator::{Parser, parse};
use ravel_foundation::{ErrorKind, Value};

fn digit() -> Parser {
    Parser::terminal("[0-9]").unwrap()
}

fn letter() -> Parser {
    Parser::terminal("[a-z]").unwrap()
}

// =============================================================================
// Sequence
// =============================================================================

#[test]
fn sequence_succeeds_when_every_child_succeeds() {
    let p = Parser::all(vec![digit(), letter()]).unwrap();
    let state = parse(&p, "7x!");
    assert!(!state.is_failed());
    assert_eq!(
        state.value(),
        &Value::tuple([Value::from("7"), Value::from("x")])
    );
    assert_eq!(state.remaining(), "!");
}

#[test]
fn sequence_fails_when_any_child_fails() {
    let p = Parser::all(vec![digit(), letter()]).unwrap();
    assert!(parse(&p, "77").is_failed());
    assert!(parse(&p, "xx").is_failed());
}

#[test]
fn empty_sequence_is_a_construction_error() {
    let err = Parser::all(vec![]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptySequence));
}

// =============================================================================
// Choice
// =============================================================================

#[test]
fn choice_takes_the_first_success_in_order() {
    let p = Parser::any(vec![letter(), digit()]).unwrap();
    let state = parse(&p, "7");
    assert_eq!(state.value(), &Value::Text("7"));
    assert_eq!(state.remaining(), "");
}

#[test]
fn choice_is_deterministic_when_both_match() {
    let first = Parser::terminal("[0-9]").unwrap();
    let second = Parser::terminal("[0-9]+").unwrap();
    let state = parse(&Parser::any(vec![first, second]).unwrap(), "42");
    // Leftmost alternative wins, not the longest match.
    assert_eq!(state.value(), &Value::Text("4"));
    assert_eq!(state.remaining(), "2");
}

#[test]
fn choice_fails_only_when_every_alternative_fails() {
    let p = Parser::any(vec![letter(), digit()]).unwrap();
    let state = parse(&p, "!");
    assert!(state.is_failed());
    assert_eq!(state.remaining(), "!");
}

#[test]
fn empty_choice_is_a_construction_error() {
    let err = Parser::any(vec![]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyAlternation));
}

// =============================================================================
// Optional
// =============================================================================

#[test]
fn optional_never_fails() {
    let p = Parser::maybe(digit());
    assert!(!parse(&p, "9").is_failed());
    assert!(!parse(&p, "x").is_failed());
    assert!(!parse(&p, "").is_failed());
}

// =============================================================================
// Repetition
// =============================================================================

#[test]
fn repetition_never_fails() {
    let p = Parser::many(digit());
    assert!(!parse(&p, "123").is_failed());
    assert!(!parse(&p, "abc").is_failed());
    assert!(!parse(&p, "").is_failed());
}

#[test]
fn repetition_stops_before_the_failing_attempt() {
    let state = parse(&Parser::many(digit()), "12x3");
    assert_eq!(
        state.value(),
        &Value::seq([Value::from("1"), Value::from("2")])
    );
    assert_eq!(state.remaining(), "x3");
}

#[test]
fn repetition_of_a_zero_width_parser_terminates() {
    let state = parse(&Parser::many(Parser::terminal("a*").unwrap()), "bbb");
    assert!(!state.is_failed());
    assert_eq!(state.value(), &Value::seq([Value::from("")]));
    assert_eq!(state.remaining(), "bbb");
}
