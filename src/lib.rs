//! Ravel - parser-combinator algebra
//!
//! This crate re-exports both layers of the ravel system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: ravel_combinator — Parse state, terminal matcher, combinators
//! Layer 0: ravel_foundation — Core types (Value, Error)
//! ```

pub use ravel_combinator as combinator;
pub use ravel_foundation as foundation;
