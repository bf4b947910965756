//! Grammar-notation rendering for parsers.
//!
//! Parsers display in a compact grammar notation: terminals as quoted
//! patterns, sequences as juxtaposition, choices parenthesized with `|`,
//! optionals in square brackets, repetitions in braces, epsilon as `ɛ`, and
//! deferred references as `λ` (their thunk is not forced just to print them).

use std::fmt;

use crate::combinator::{Kind, Parser};

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.as_ref() {
            Kind::Nothing => write!(f, "ɛ"),
            Kind::Terminal(terminal) => write!(f, "{:?}", terminal.pattern()),
            Kind::All(parsers) => {
                for (i, parser) in parsers.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{parser}")?;
                }
                Ok(())
            }
            Kind::Any(parsers) => {
                write!(f, "(")?;
                for (i, parser) in parsers.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{parser}")?;
                }
                write!(f, ")")
            }
            Kind::Maybe(parser) => write!(f, "[{parser}]"),
            Kind::Many(parser) => write!(f, "{{{parser}}}"),
            Kind::Defer(_) => write!(f, "λ"),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser({self})")
    }
}
