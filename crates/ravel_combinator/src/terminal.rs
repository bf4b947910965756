//! Terminal matcher.
//!
//! Terminals are the only parsers that touch raw input. A [`Terminal`] holds
//! a compiled regular expression anchored at the current position: matching
//! either consumes a prefix of the remaining input or fails in place. There
//! is no search-ahead and no implicit whitespace skipping; within the
//! anchored position the pattern's own rules decide how much is consumed.

use regex::Regex;

use ravel_foundation::{Error, Result, Value};

use crate::state::Parse;

/// A parser that consumes a prefix of the remaining input matching a pattern.
#[derive(Debug, Clone)]
pub struct Terminal {
    /// The pattern as supplied by the caller.
    pattern: String,
    /// The compiled pattern, anchored at the match position.
    regex: Regex,
}

impl Terminal {
    /// Compiles a terminal matcher from a regular expression pattern.
    ///
    /// The pattern is anchored for the caller; `[0-9]` matches a leading
    /// digit, never a digit further into the input.
    ///
    /// # Errors
    /// Returns [`ravel_foundation::ErrorKind::InvalidPattern`] if the pattern
    /// does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})"))
            .map_err(|e| Error::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern this terminal was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Attempts to match this terminal at the start of the remaining input.
    ///
    /// On a match, the returned state has the remaining input advanced past
    /// the matched text and the matched text as its result. On no match, the
    /// input state is returned marked failed, its remaining input and result
    /// untouched.
    #[must_use]
    pub fn apply<'i>(&self, parse: Parse<'i>) -> Parse<'i> {
        match self.regex.find(parse.remaining()) {
            Some(m) => Parse::succeed(&parse.remaining()[m.end()..], Value::Text(m.as_str())),
            None => parse.fail(),
        }
    }
}
