//! Fixed page grammars and the positional matcher
//!
//! A [`Grammar`] is an ordered list of terms, each mandatory, optional, or
//! (for the single trailing `section` term of the class grammar) repeating.
//! Matching is strict and positional: tokens are consumed left to right, an
//! optional term may be absent but if present must appear in its declared
//! slot, and no unexpected token may appear between terms. The matcher is a
//! plain walk over the term list rather than a compiled regular expression,
//! which keeps failure positions exact and avoids token-text escaping.
//!
//! Greedy consumption is complete for these grammars: every term after the
//! mandatory leading `title` is optional, so a consumed token can never be
//! needed by a later mandatory term.
//!
//! Two grammars exist, fixed at startup and immutable thereafter:
//! [`CLASS_PAGE`] for the top-level sections allowed inside a class page and
//! [`MEMBER_SECTION`] for the sections allowed inside one member subsection.
//! Term order is load-bearing; the matcher is positional, not a set check.

use crate::token::{Companion, Token};
use once_cell::sync::Lazy;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Optional,
    ZeroOrMore,
}

/// One slot of a page grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub token: Token,
    pub cardinality: Cardinality,
}

fn req(token: Token) -> Term {
    Term {
        token,
        cardinality: Cardinality::One,
    }
}

fn opt(token: Token) -> Term {
    Term {
        token,
        cardinality: Cardinality::Optional,
    }
}

fn many(token: Token) -> Term {
    Term {
        token,
        cardinality: Cardinality::ZeroOrMore,
    }
}

/// Outcome of matching a token sequence against a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Conforms,
    /// Earliest token offset that could not be matched.
    Mismatch { offset: usize },
}

impl MatchResult {
    pub fn conforms(&self) -> bool {
        matches!(self, MatchResult::Conforms)
    }
}

/// An ordered, mostly-optional sequence of grammar terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub name: &'static str,
    pub terms: Vec<Term>,
}

impl Grammar {
    /// Match an encoded token sequence against this grammar.
    pub fn matches(&self, tokens: &[Token]) -> MatchResult {
        let mut offset = 0;
        for term in &self.terms {
            match term.cardinality {
                Cardinality::One => {
                    if tokens.get(offset) == Some(&term.token) {
                        offset += 1;
                    } else {
                        return MatchResult::Mismatch { offset };
                    }
                }
                Cardinality::Optional => {
                    if tokens.get(offset) == Some(&term.token) {
                        offset += 1;
                    }
                }
                Cardinality::ZeroOrMore => {
                    while tokens.get(offset) == Some(&term.token) {
                        offset += 1;
                    }
                }
            }
        }
        if offset == tokens.len() {
            MatchResult::Conforms
        } else {
            MatchResult::Mismatch { offset }
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.terms {
            match term.cardinality {
                Cardinality::One => write!(f, ":{}", term.token)?,
                Cardinality::Optional => write!(f, "(:{})?", term.token)?,
                Cardinality::ZeroOrMore => write!(f, "(:{})*", term.token)?,
            }
        }
        Ok(())
    }
}

/// Sections allowed inside a class page, in their one permitted order.
pub static CLASS_PAGE: Lazy<Grammar> = Lazy::new(|| Grammar {
    name: "class page",
    terms: vec![
        req(Token::Title),
        opt(Token::rubric_with("Template parameters", Companion::Table)),
        opt(Token::rubric("Example")),
        opt(Token::rubric_with("Kernel dispatch", Companion::Table)),
        opt(Token::rubric_with("Memory operations", Companion::Table)),
        opt(Token::rubric_with("Member types", Companion::Table)),
        opt(Token::rubric_with("Nonmember data", Companion::Table)),
        opt(Token::SeeAlso),
        opt(Token::rubric("Member and nonmember functions")),
        opt(Token::rubric("Example")),
        many(Token::Section),
    ],
});

/// Sections allowed inside one member subsection, in their permitted order.
pub static MEMBER_SECTION: Lazy<Grammar> = Lazy::new(|| Grammar {
    name: "member section",
    terms: vec![
        req(Token::Title),
        opt(Token::Comment),
        opt(Token::rubric_with("Template parameters", Companion::Table)),
        opt(Token::rubric_with("Parameters", Companion::Table)),
        opt(Token::rubric_with("Parameters", Companion::DefinitionList)),
        opt(Token::rubric("Returns")),
        opt(Token::rubric("Exceptions")),
        opt(Token::rubric_with("Exceptions", Companion::DefinitionList)),
        opt(Token::rubric("Example")),
    ],
});
