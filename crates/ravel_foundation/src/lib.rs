//! Core types for the ravel parser-combinator system.
//!
//! This crate provides:
//! - [`Value`] - The accumulated result of a parse, opaque to the engine
//! - [`Error`] - Construction-time and conversion errors
//! - [`Result`] - Alias for results carrying [`Error`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use value::Value;
