//! The accumulated result of a parse.
//!
//! The engine never inspects the shape of a value it did not produce itself:
//! terminals produce [`Value::Text`], the sequencer produces [`Value::Tuple`],
//! the repeater produces [`Value::Seq`], and combinators only ever append
//! child results, never look inside them.

use std::fmt;

use im::Vector;

/// The accumulated result of a parse.
///
/// Values borrow matched text from the input rather than copying it, and the
/// composite variants use persistent vectors so that cloning a value (which
/// happens every time an alternative is retried) is cheap.
#[derive(Clone, PartialEq, Eq)]
pub enum Value<'i> {
    /// The empty/absent result: the initial state, a failed optional, epsilon.
    Unit,
    /// Text matched by a terminal, borrowed from the input.
    Text(&'i str),
    /// Ordered tuple of sub-results produced by a sequence.
    Tuple(Vector<Value<'i>>),
    /// Sequence of sub-results produced by a repetition.
    Seq(Vector<Value<'i>>),
}

impl<'i> Value<'i> {
    /// Builds a tuple value from an ordered collection of results.
    #[must_use]
    pub fn tuple(items: impl IntoIterator<Item = Value<'i>>) -> Self {
        Self::Tuple(items.into_iter().collect())
    }

    /// Builds a sequence value from an ordered collection of results.
    #[must_use]
    pub fn seq(items: impl IntoIterator<Item = Value<'i>>) -> Self {
        Self::Seq(items.into_iter().collect())
    }

    /// Returns true if this value is the unit value.
    #[must_use]
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Attempts to extract matched text.
    #[must_use]
    pub const fn as_text(&self) -> Option<&'i str> {
        match self {
            Self::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Attempts to extract a tuple of sub-results.
    #[must_use]
    pub const fn as_tuple(&self) -> Option<&Vector<Value<'i>>> {
        match self {
            Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract a sequence of sub-results.
    #[must_use]
    pub const fn as_seq(&self) -> Option<&Vector<Value<'i>>> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }
}

impl<'i> From<&'i str> for Value<'i> {
    fn from(s: &'i str) -> Self {
        Self::Text(s)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "()"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Self::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
