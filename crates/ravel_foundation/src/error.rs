//! Error types for the ravel system.
//!
//! Uses `thiserror` for ergonomic error definition. These errors cover
//! programmer mistakes caught at construction time and the bridge from a
//! failed final parse state to `Result`; a parser failing to match input is
//! not an error, it is data (the `failed` flag on a parse state).

use thiserror::Error;

/// The main error type for ravel operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty-sequence construction error.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::new(ErrorKind::EmptySequence)
    }

    /// Creates an empty-alternation construction error.
    #[must_use]
    pub fn empty_alternation() -> Self {
        Self::new(ErrorKind::EmptyAlternation)
    }

    /// Creates an invalid-pattern construction error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    /// Creates an error describing a failed parse.
    #[must_use]
    pub fn parse_failed(remaining: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed {
            remaining: remaining.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A sequence combinator was constructed with no parsers.
    #[error("sequence requires at least one parser")]
    EmptySequence,

    /// An alternation combinator was constructed with no parsers.
    #[error("alternation requires at least one parser")]
    EmptyAlternation,

    /// A terminal pattern failed to compile.
    #[error("invalid terminal pattern {pattern:?}: {message}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The underlying regex compilation message.
        message: String,
    },

    /// A final parse state carried the failed flag.
    #[error("parse failed with {remaining:?} unconsumed")]
    ParseFailed {
        /// The input left unconsumed by the failing state.
        remaining: String,
    },
}

/// Result alias for ravel operations.
pub type Result<T> = std::result::Result<T, Error>;
