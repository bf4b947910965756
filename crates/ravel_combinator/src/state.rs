//! Immutable parse state.
//!
//! A [`Parse`] is a snapshot of one point in a parse: the suffix of the
//! original input not yet consumed, the result accumulated so far, and a
//! success/failure flag. States are threaded by value through the combinator
//! call graph; every combinator produces a new state rather than mutating the
//! one it received, and no state outlives a single top-level invocation.
//!
//! Failure is data, not an exception: a failed state keeps the remaining
//! input and result of the state that failed, so nothing is silently
//! discarded. Combinators that try multiple alternatives restart each
//! alternative from their own pre-call state, which they still hold.

use ravel_foundation::{Error, Result, Value};

/// Immutable snapshot of remaining input, accumulated result, and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse<'i> {
    /// The suffix of the original input not yet consumed.
    remaining: &'i str,
    /// The accumulated result, opaque to the engine.
    value: Value<'i>,
    /// Whether this state represents a failed parse.
    failed: bool,
}

impl<'i> Parse<'i> {
    /// Creates the initial state for a top-level parse over `input`.
    #[must_use]
    pub fn start(input: &'i str) -> Self {
        Self {
            remaining: input,
            value: Value::Unit,
            failed: false,
        }
    }

    /// Creates a successful state with the given remaining input and result.
    #[must_use]
    pub fn succeed(remaining: &'i str, value: Value<'i>) -> Self {
        Self {
            remaining,
            value,
            failed: false,
        }
    }

    /// Coerces this state into a failure, keeping its remaining input and
    /// result as the context of the failure.
    #[must_use]
    pub fn fail(self) -> Self {
        Self {
            failed: true,
            ..self
        }
    }

    /// The suffix of the original input not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> &'i str {
        self.remaining
    }

    /// The accumulated result.
    #[must_use]
    pub const fn value(&self) -> &Value<'i> {
        &self.value
    }

    /// Consumes the state, returning the accumulated result.
    #[must_use]
    pub fn into_value(self) -> Value<'i> {
        self.value
    }

    /// Whether this state represents a failed parse.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.failed
    }

    /// Converts a final state into a `Result`, surfacing the accumulated
    /// result on success and the unconsumed input on failure.
    ///
    /// # Errors
    /// Returns [`ravel_foundation::ErrorKind::ParseFailed`] if this state
    /// carries the failed flag.
    pub fn into_result(self) -> Result<Value<'i>> {
        if self.failed {
            Err(Error::parse_failed(self.remaining))
        } else {
            Ok(self.value)
        }
    }
}
