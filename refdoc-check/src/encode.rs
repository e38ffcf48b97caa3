//! Child-sequence encoding
//!
//! [`encode_children`] turns the ordered direct children of a section node
//! into the token sequence the grammar matcher consumes. It is a pure
//! function: no side effects beyond the returned [`Encoding`].
//!
//! Three rules, applied in document order:
//!
//! - kinds in the [`IgnoreSet`] contribute nothing;
//! - a rubric folds in the next significant sibling when that sibling is a
//!   companion kind (table or definition list);
//! - a title is encoded as `title` and its text captured as the section name.

use crate::token::{Companion, Token};
use refdoc_model::{kind, Node};
use std::collections::HashSet;

/// Kinds that carry no structural weight on a reference page.
///
/// `comment` and `definition_list` are deliberately absent: both appear as
/// grammar terms, so skipping them would make those terms unreachable.
pub const DEFAULT_IGNORED_KINDS: [&str; 7] = [
    kind::PARAGRAPH,
    kind::LITERAL_BLOCK,
    kind::SYSTEM_MESSAGE,
    kind::TARGET,
    kind::TRANSITION,
    kind::TODO,
    kind::BLOCK_QUOTE,
];

/// The set of node kinds skipped entirely during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    kinds: HashSet<String>,
}

impl IgnoreSet {
    pub fn from_kinds<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.kinds.contains(tag)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::from_kinds(DEFAULT_IGNORED_KINDS)
    }
}

/// Result of encoding one section's direct children.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoding {
    /// Tokens in document order.
    pub tokens: Vec<Token>,
    /// Text of the first `title` child, if one was seen.
    pub title: Option<String>,
}

/// Encode a section's direct children into a token sequence.
pub fn encode_children(children: &[Node], ignore: &IgnoreSet) -> Encoding {
    let significant: Vec<&Node> = children
        .iter()
        .filter(|node| !ignore.contains(&node.kind))
        .collect();

    let mut tokens = Vec::new();
    let mut title = None;

    let mut index = 0;
    while index < significant.len() {
        let node = significant[index];
        match node.kind.as_str() {
            kind::TITLE => {
                if title.is_none() {
                    title = node.text.clone();
                }
                tokens.push(Token::Title);
            }
            kind::RUBRIC => {
                let label = node.text.clone().unwrap_or_default();
                let companion = significant
                    .get(index + 1)
                    .and_then(|next| Companion::from_kind(&next.kind));
                if companion.is_some() {
                    index += 1;
                }
                tokens.push(Token::Rubric { label, companion });
            }
            other => tokens.push(Token::classify(other)),
        }
        index += 1;
    }

    Encoding { tokens, title }
}
