//! Structural combinators.
//!
//! A [`Parser`] is a cheap-to-clone handle over a closed set of parser kinds:
//! the epsilon parser, a terminal matcher, sequence, choice, optional,
//! repetition, and deferred reference. The engine has a single dispatch
//! point, [`Parser::apply`], which maps a parse state to a parse state; the
//! combinators differ only in how they delegate to their children.
//!
//! Construction-time misuse (an empty sequence or alternation, an invalid
//! terminal pattern) is rejected by the constructors and never reaches
//! `apply`. Runtime match failure is never an `Err`: it is the failed flag on
//! the returned state.

use std::ops::{BitAnd, BitOr};
use std::rc::Rc;

use im::Vector;

use ravel_foundation::{Error, Result, Value};

use crate::state::Parse;
use crate::terminal::Terminal;

/// A composable parser: a mapping from parse state to parse state.
///
/// Parsers are handles over shared immutable structure; cloning one is cheap
/// and grammars may share subtrees freely. A parser value is self-contained
/// and reentrant, with no global state.
#[derive(Clone)]
pub struct Parser {
    pub(crate) kind: Rc<Kind>,
}

/// The closed set of parser kinds.
pub(crate) enum Kind {
    /// Epsilon: the identity parser.
    Nothing,
    /// A terminal matcher.
    Terminal(Terminal),
    /// Sequence: all children in order.
    All(Vec<Parser>),
    /// Ordered choice: first succeeding child wins.
    Any(Vec<Parser>),
    /// Optional: child or a no-op success.
    Maybe(Parser),
    /// Repetition: child until it fails.
    Many(Parser),
    /// Deferred reference: a thunk forced at application time.
    Defer(Rc<dyn Fn() -> Parser>),
}

impl Parser {
    fn new(kind: Kind) -> Self {
        Self {
            kind: Rc::new(kind),
        }
    }

    /// The epsilon parser: returns any state unchanged. Never fails, never
    /// consumes.
    #[must_use]
    pub fn nothing() -> Self {
        Self::new(Kind::Nothing)
    }

    /// A terminal parser matching `pattern` anchored at the current position.
    ///
    /// # Errors
    /// Returns [`ravel_foundation::ErrorKind::InvalidPattern`] if the pattern
    /// does not compile.
    pub fn terminal(pattern: &str) -> Result<Self> {
        Ok(Self::new(Kind::Terminal(Terminal::new(pattern)?)))
    }

    /// The sequence of `parsers`, applied in order; succeeds only if all
    /// succeed, with the ordered tuple of their results.
    ///
    /// # Errors
    /// Returns [`ravel_foundation::ErrorKind::EmptySequence`] if `parsers`
    /// is empty.
    pub fn all(parsers: Vec<Parser>) -> Result<Self> {
        if parsers.is_empty() {
            return Err(Error::empty_sequence());
        }
        Ok(Self::new(Kind::All(parsers)))
    }

    /// The ordered choice of `parsers`: each alternative is tried against
    /// the same starting state and the first success wins.
    ///
    /// # Errors
    /// Returns [`ravel_foundation::ErrorKind::EmptyAlternation`] if `parsers`
    /// is empty.
    pub fn any(parsers: Vec<Parser>) -> Result<Self> {
        if parsers.is_empty() {
            return Err(Error::empty_alternation());
        }
        Ok(Self::new(Kind::Any(parsers)))
    }

    /// The optional form of `parser`: its result on success, a unit result
    /// with no input consumed on failure. Never fails.
    #[must_use]
    pub fn maybe(parser: Parser) -> Self {
        Self::new(Kind::Maybe(parser))
    }

    /// The repetition of `parser`: applied until it fails, accumulating a
    /// sequence of results. Never fails; zero repetitions is a success.
    #[must_use]
    pub fn many(parser: Parser) -> Self {
        Self::new(Kind::Many(parser))
    }

    /// A deferred reference: `thunk` is forced on every application and the
    /// state delegated to the parser it produces. This is the mechanism for
    /// a rule to refer to itself, or to a rule defined later:
    ///
    /// ```
    /// use ravel_combinator::{Parser, parse};
    ///
    /// fn numbers() -> Parser {
    ///     let digit = Parser::terminal("[0-9]").unwrap();
    ///     digit & (Parser::defer(numbers) | Parser::nothing())
    /// }
    ///
    /// assert!(!parse(&numbers(), "42").is_failed());
    /// ```
    ///
    /// There is no left-recursion support: a rule that reaches itself before
    /// consuming any input recurses until the call stack is exhausted.
    #[must_use]
    pub fn defer(thunk: impl Fn() -> Parser + 'static) -> Self {
        Self::new(Kind::Defer(Rc::new(thunk)))
    }

    /// Applies this parser to a parse state, producing a new state.
    #[must_use]
    pub fn apply<'i>(&self, parse: Parse<'i>) -> Parse<'i> {
        match self.kind.as_ref() {
            Kind::Nothing => parse,
            Kind::Terminal(terminal) => terminal.apply(parse),
            Kind::All(parsers) => apply_all(parsers, &parse),
            Kind::Any(parsers) => apply_any(parsers, &parse),
            Kind::Maybe(parser) => apply_maybe(parser, parse),
            Kind::Many(parser) => apply_many(parser, &parse),
            Kind::Defer(thunk) => thunk().apply(parse),
        }
    }
}

/// Applies a parser to a grammar's whole input, returning the final state.
#[must_use]
pub fn parse<'i>(parser: &Parser, input: &'i str) -> Parse<'i> {
    parser.apply(Parse::start(input))
}

fn apply_all<'i>(parsers: &[Parser], parse: &Parse<'i>) -> Parse<'i> {
    let mut results: Vector<Value<'i>> = Vector::new();
    let mut remaining = parse.remaining();

    for parser in parsers {
        // Each child starts from a unit result so sibling results never
        // leak into each other; accumulation happens here, not in the child.
        let step = parser.apply(Parse::succeed(remaining, Value::Unit));
        if step.is_failed() {
            return step;
        }
        remaining = step.remaining();
        results.push_back(step.into_value());
    }

    Parse::succeed(remaining, Value::Tuple(results))
}

fn apply_any<'i>(parsers: &[Parser], parse: &Parse<'i>) -> Parse<'i> {
    for parser in parsers {
        // Every alternative restarts from the same pre-call state.
        let attempt = parser.apply(parse.clone());
        if !attempt.is_failed() {
            return attempt;
        }
    }
    parse.clone().fail()
}

fn apply_maybe<'i>(parser: &Parser, parse: Parse<'i>) -> Parse<'i> {
    let attempt = parser.apply(parse.clone());
    if attempt.is_failed() { parse } else { attempt }
}

fn apply_many<'i>(parser: &Parser, parse: &Parse<'i>) -> Parse<'i> {
    let mut results: Vector<Value<'i>> = Vector::new();
    let mut remaining = parse.remaining();

    loop {
        let attempt = parser.apply(Parse::succeed(remaining, Value::Unit));
        if attempt.is_failed() {
            return Parse::succeed(remaining, Value::Seq(results));
        }
        let width = remaining.len() - attempt.remaining().len();
        remaining = attempt.remaining();
        results.push_back(attempt.into_value());
        if width == 0 {
            // A zero-width success is kept once; repeating it would never
            // advance the input.
            return Parse::succeed(remaining, Value::Seq(results));
        }
    }
}

impl BitAnd for Parser {
    type Output = Parser;

    /// `p & q` is the two-parser sequence of `p` then `q`.
    fn bitand(self, rhs: Parser) -> Parser {
        Parser::new(Kind::All(vec![self, rhs]))
    }
}

impl BitOr for Parser {
    type Output = Parser;

    /// `p | q` is the ordered choice of `p` over `q`.
    fn bitor(self, rhs: Parser) -> Parser {
        Parser::new(Kind::Any(vec![self, rhs]))
    }
}
