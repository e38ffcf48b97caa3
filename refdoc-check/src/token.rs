//! Grammar tokens
//!
//! A [`Token`] is the symbolic label a node kind contributes to a page's
//! encoded structure. The parser's kind tags are an open set, so
//! classification is a closed function with [`Token::Other`] as the
//! unclassified default rather than dispatch on the raw tag at every use
//! site.
//!
//! Rubrics are the one content-sensitive case: a rubric's label text is part
//! of its token identity ("Parameters" and "Returns" rubrics occupy different
//! grammar slots), and a rubric immediately followed by a companion node
//! (its table or definition list) forms a single compound token.

use refdoc_model::kind;
use std::fmt;

/// Node kinds that attach to a preceding rubric as part of the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Companion {
    Table,
    DefinitionList,
}

impl Companion {
    pub fn from_kind(tag: &str) -> Option<Self> {
        match tag {
            kind::TABLE => Some(Companion::Table),
            kind::DEFINITION_LIST => Some(Companion::DefinitionList),
            _ => None,
        }
    }

    pub fn as_kind(&self) -> &'static str {
        match self {
            Companion::Table => kind::TABLE,
            Companion::DefinitionList => kind::DEFINITION_LIST,
        }
    }
}

/// One symbol of a page's encoded structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Title,
    Comment,
    SeeAlso,
    Section,
    Rubric {
        label: String,
        companion: Option<Companion>,
    },
    /// Any kind outside the closed set, encoded as its bare tag.
    Other(String),
}

impl Token {
    /// Classify a non-rubric node kind. Rubric tokens are assembled by the
    /// encoder because they fold in label text and companions.
    pub fn classify(tag: &str) -> Token {
        match tag {
            kind::TITLE => Token::Title,
            kind::COMMENT => Token::Comment,
            kind::SEEALSO => Token::SeeAlso,
            kind::SECTION => Token::Section,
            other => Token::Other(other.to_string()),
        }
    }

    pub fn rubric(label: impl Into<String>) -> Token {
        Token::Rubric {
            label: label.into(),
            companion: None,
        }
    }

    pub fn rubric_with(label: impl Into<String>, companion: Companion) -> Token {
        Token::Rubric {
            label: label.into(),
            companion: Some(companion),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Title => write!(f, "title"),
            Token::Comment => write!(f, "comment"),
            Token::SeeAlso => write!(f, "seealso"),
            Token::Section => write!(f, "section"),
            Token::Rubric { label, companion } => {
                write!(f, "rubric {}", label)?;
                if let Some(companion) = companion {
                    write!(f, " {}", companion.as_kind())?;
                }
                Ok(())
            }
            Token::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Render a token sequence the way diagnostics show it: one `:`-prefixed
/// symbol per token.
pub fn render_sequence(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push(':');
        out.push_str(&token.to_string());
    }
    out
}
