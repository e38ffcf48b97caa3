//! Document tree nodes
//!
//! A [`Node`] is the parser's view of one element of a reference page: a kind
//! tag, an ordered child sequence, a set of classification marks for container
//! nodes, and a text payload for title-like nodes. The tag set is open on the
//! parser side, so `kind` stays a plain string here; the checker classifies
//! kinds into a closed token enum at its own boundary.
//!
//! The checker treats trees as frozen: all traversal is by shared reference.
//! The builder-style constructors (`Node::section(..).mark(..).at(..)`) exist
//! for fixtures and tests on the consuming side.

use crate::range::Range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mark applied by the parser to sections that are API class pages.
///
/// Only sections carrying this mark are candidates for structure validation.
pub const API_CLASS_MARK: &str = "api-class";

/// Node kind tags produced by the upstream parser.
pub mod kind {
    pub const SECTION: &str = "section";
    pub const TITLE: &str = "title";
    pub const RUBRIC: &str = "rubric";
    pub const TABLE: &str = "table";
    pub const DEFINITION_LIST: &str = "definition_list";
    pub const COMMENT: &str = "comment";
    pub const SEEALSO: &str = "seealso";
    pub const PARAGRAPH: &str = "paragraph";
    pub const LITERAL_BLOCK: &str = "literal_block";
    pub const SYSTEM_MESSAGE: &str = "system_message";
    pub const TARGET: &str = "target";
    pub const TRANSITION: &str = "transition";
    pub const TODO: &str = "todo_node";
    pub const BLOCK_QUOTE: &str = "block_quote";
}

/// One node of a parsed reference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default)]
    pub location: Range,
}

impl Node {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: None,
            marks: Vec::new(),
            children: Vec::new(),
            location: Range::default(),
        }
    }

    /// A `section` node with its `title` child already in place.
    pub fn section(title: impl Into<String>) -> Self {
        Node::new(kind::SECTION).child(Node::title(title))
    }

    /// A `title` node carrying the section name.
    pub fn title(text: impl Into<String>) -> Self {
        Node::new(kind::TITLE).text(text)
    }

    /// A `rubric` node carrying its label, e.g. "Parameters".
    pub fn rubric(label: impl Into<String>) -> Self {
        Node::new(kind::RUBRIC).text(label)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn mark(mut self, mark: impl Into<String>) -> Self {
        self.marks.push(mark.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Preferred builder
    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn has_mark(&self, mark: &str) -> bool {
        self.marks.iter().any(|m| m == mark)
    }

    pub fn is_section(&self) -> bool {
        self.kind == kind::SECTION
    }

    /// Text of this node's `title` child, if it has one.
    pub fn title_text(&self) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.kind == kind::TITLE)
            .and_then(|title| title.text.as_deref())
    }

    /// All descendant sections in document order (pre-order), excluding self.
    pub fn descendant_sections(&self) -> Vec<&Node> {
        let mut sections = Vec::new();
        collect_sections(&self.children, &mut sections);
        sections
    }

    /// All sections in document order, including this node if it is one.
    pub fn sections_with_self(&self) -> Vec<&Node> {
        let mut sections = Vec::new();
        if self.is_section() {
            sections.push(self);
        }
        collect_sections(&self.children, &mut sections);
        sections
    }
}

fn collect_sections<'a>(children: &'a [Node], out: &mut Vec<&'a Node>) {
    for child in children {
        if child.is_section() {
            out.push(child);
        }
        collect_sections(&child.children, out);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}('{}')", self.kind, text),
            None => write!(f, "{}({} children)", self.kind, self.children.len()),
        }
    }
}
