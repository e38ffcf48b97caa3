//! Page validation
//!
//! Orchestrates one document's structure check. Candidate pages are the
//! sections the parser marked `api-class`; everything else is ignored
//! regardless of its internal shape. Each candidate is validated twice over,
//! at two tree depths that are never conflated:
//!
//! 1. the page's own direct children against the class-page grammar;
//! 2. every nested section beneath it (depth-unbounded, excluding the page's
//!    own top level) independently against the member-section grammar.
//!
//! A mismatch at either level produces a diagnostic and nothing more;
//! validation of sibling pages and remaining subsections continues. The
//! owning class name is threaded through the member pass as an explicit
//! argument so nothing leaks across documents.

use crate::encode::{encode_children, IgnoreSet};
use crate::grammar::{Grammar, MatchResult, CLASS_PAGE, MEMBER_SECTION};
use crate::manifest::Manifest;
use crate::report::{Diagnostic, DiagnosticSeverity, Reporter};
use crate::token::{render_sequence, Token};
use refdoc_model::{Node, API_CLASS_MARK};

/// Everything one validation pass produces.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub manifest: Manifest,
}

/// Validate every marked class page in a document tree.
pub fn validate_document(tree: &Node, ignore: &IgnoreSet) -> ValidationOutcome {
    let mut reporter = Reporter::new();
    let mut manifest = Manifest::new();

    for section in tree.sections_with_self() {
        if section.has_mark(API_CLASS_MARK) {
            check_class(section, ignore, &mut reporter, &mut manifest);
        }
    }

    ValidationOutcome {
        diagnostics: reporter.into_diagnostics(),
        manifest,
    }
}

fn check_class(section: &Node, ignore: &IgnoreSet, reporter: &mut Reporter, manifest: &mut Manifest) {
    let encoding = encode_children(&section.children, ignore);

    // The parser promises a title on every section; a candidate without one
    // is reported loudly rather than silently mis-filed.
    let class_name = match encoding.title.clone() {
        Some(name) => {
            manifest.begin_class(&name);
            Some(name)
        }
        None => {
            reporter.emit(
                Diagnostic::new(
                    section.location.clone(),
                    DiagnosticSeverity::Error,
                    "Class page without a title".to_string(),
                )
                .with_code("missing-title"),
            );
            None
        }
    };

    if let MatchResult::Mismatch { offset } = CLASS_PAGE.matches(&encoding.tokens) {
        reporter.emit(structure_mismatch(
            "Class structure mismatch",
            section,
            &encoding.tokens,
            &CLASS_PAGE,
            offset,
        ));
    }

    for subsection in section.descendant_sections() {
        check_member(class_name.as_deref(), subsection, ignore, reporter, manifest);
    }
}

fn check_member(
    class_name: Option<&str>,
    section: &Node,
    ignore: &IgnoreSet,
    reporter: &mut Reporter,
    manifest: &mut Manifest,
) {
    let encoding = encode_children(&section.children, ignore);

    match encoding.title.as_deref() {
        // A member only lands in the manifest when its owning class did.
        Some(name) if class_name.is_some() => manifest.push_member(name),
        Some(_) => {}
        None => {
            reporter.emit(
                Diagnostic::new(
                    section.location.clone(),
                    DiagnosticSeverity::Error,
                    "Member section without a title".to_string(),
                )
                .with_code("missing-title"),
            );
        }
    }

    if let MatchResult::Mismatch { offset } = MEMBER_SECTION.matches(&encoding.tokens) {
        reporter.emit(structure_mismatch(
            "Class section structure mismatch",
            section,
            &encoding.tokens,
            &MEMBER_SECTION,
            offset,
        ));
    }
}

fn structure_mismatch(
    message: &str,
    section: &Node,
    tokens: &[Token],
    grammar: &Grammar,
    offset: usize,
) -> Diagnostic {
    Diagnostic::new(
        section.location.clone(),
        DiagnosticSeverity::Warning,
        message.to_string(),
    )
    .with_code("structure")
    .with_shapes(
        format!(
            "{} (first divergence at token {})",
            render_sequence(tokens),
            offset
        ),
        grammar.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdoc_model::kind;

    fn validate(tree: &Node) -> ValidationOutcome {
        validate_document(tree, &IgnoreSet::default())
    }

    fn member(name: &str) -> Node {
        Node::section(name)
            .child(Node::rubric("Parameters"))
            .child(Node::new(kind::TABLE))
            .child(Node::rubric("Returns"))
    }

    #[test]
    fn unmarked_sections_are_never_validated() {
        // Wildly malformed, but not a candidate.
        let tree = Node::new("document").child(
            Node::section("free text")
                .child(Node::new("bullet_list"))
                .child(Node::rubric("Whatever")),
        );
        let outcome = validate(&tree);
        assert!(outcome.diagnostics.is_empty());
        assert!(outcome.manifest.is_empty());
    }

    #[test]
    fn conforming_class_page_yields_no_diagnostics() {
        let tree = Node::new("document").child(
            Node::section("queue")
                .mark(API_CLASS_MARK)
                .child(Node::rubric("Template parameters"))
                .child(Node::new(kind::TABLE))
                .child(member("submit")),
        );
        let outcome = validate(&tree);
        assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);
        assert_eq!(outcome.manifest.render(), "class: queue\n  member: submit\n");
    }

    #[test]
    fn class_mismatch_is_one_diagnostic_and_nonfatal() {
        let tree = Node::new("document")
            .child(
                Node::section("queue")
                    .mark(API_CLASS_MARK)
                    .child(Node::rubric("Example"))
                    .child(Node::rubric("Template parameters"))
                    .child(Node::new(kind::TABLE)),
            )
            .child(
                Node::section("event")
                    .mark(API_CLASS_MARK)
                    .child(member("wait")),
            );
        let outcome = validate(&tree);

        assert_eq!(outcome.diagnostics.len(), 1);
        let diag = &outcome.diagnostics[0];
        assert_eq!(diag.message, "Class structure mismatch");
        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert!(diag
            .got
            .as_deref()
            .is_some_and(|got| got.contains("divergence at token 2")));
        assert!(diag
            .expected
            .as_deref()
            .is_some_and(|expected| expected.starts_with(":title")));

        // The sibling page still validated and both landed in the manifest.
        assert_eq!(
            outcome.manifest.render(),
            "class: queue\nclass: event\n  member: wait\n"
        );
    }

    #[test]
    fn member_sections_are_discovered_at_any_depth() {
        let deep = Node::section("submit").child(
            Node::section("submit overloads")
                .child(Node::rubric("Returns"))
                .child(Node::section("deepest")),
        );
        let tree = Node::new("document")
            .child(Node::section("queue").mark(API_CLASS_MARK).child(deep));
        let outcome = validate(&tree);

        // "deepest" sits inside a member section; the member grammar has no
        // section term, so its parent mismatches, and "deepest" itself is
        // still validated independently.
        assert_eq!(
            outcome.manifest.render(),
            "class: queue\n  member: submit\n  member: submit overloads\n  member: deepest\n"
        );
        let messages: Vec<_> = outcome
            .diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Class section structure mismatch",
                "Class section structure mismatch"
            ]
        );
    }

    #[test]
    fn class_page_mismatch_does_not_skip_member_validation() {
        let tree = Node::new("document").child(
            Node::section("queue")
                .mark(API_CLASS_MARK)
                .child(Node::new("bullet_list"))
                .child(Node::section("submit").child(Node::rubric("Bogus rubric"))),
        );
        let outcome = validate(&tree);
        let messages: Vec<_> = outcome
            .diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Class structure mismatch", "Class section structure mismatch"]
        );
    }

    #[test]
    fn missing_title_fails_loudly_and_skips_the_manifest_line() {
        let tree = Node::new("document").child(
            Node::new(kind::SECTION)
                .mark(API_CLASS_MARK)
                .child(Node::rubric("Example")),
        );
        let outcome = validate(&tree);

        assert!(outcome
            .diagnostics
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error
                && d.message == "Class page without a title"));
        assert!(outcome.manifest.is_empty());
    }

    #[test]
    fn marked_root_section_is_a_candidate() {
        let tree = Node::section("queue").mark(API_CLASS_MARK);
        let outcome = validate(&tree);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(outcome.manifest.render(), "class: queue\n");
    }
}
