//! Combinator evaluation engine for ravel.
//!
//! This crate provides:
//! - [`Parse`] - Immutable parse state threaded through a grammar
//! - [`Terminal`] - Anchored regex terminal matcher
//! - [`Parser`] - Composable parser handle (sequence, choice, optional,
//!   repetition, deferred reference)
//! - [`parse`] - Top-level entry point applying a parser to an input string
//!
//! A grammar is built by composing terminals with the structural combinators
//! into a single [`Parser`] value, then invoked once over the full input:
//!
//! ```
//! use ravel_combinator::{Parser, parse};
//!
//! let digit = Parser::terminal("[0-9]").unwrap();
//! let number = Parser::all(vec![digit.clone(), Parser::many(digit)]).unwrap();
//!
//! let state = parse(&number, "123abc");
//! assert!(!state.is_failed());
//! assert_eq!(state.remaining(), "abc");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinator;
pub mod pretty;
pub mod state;
pub mod terminal;

pub use combinator::{Parser, parse};
pub use state::Parse;
pub use terminal::Terminal;
