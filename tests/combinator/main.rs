//! Integration tests for Layer 1: Combinator
//!
//! Tests for parse state, the terminal matcher, the structural combinators,
//! and end-to-end grammars.

mod combinator;
mod state;
