//! Diagnostic collection
//!
//! Structural findings are surfaced as [`Diagnostic`] values for the
//! surrounding build pipeline's logging channel. They are non-fatal by
//! design: a mismatch on one page never stops validation of its siblings.
//!
//! The [`Reporter`] deduplicates structurally equal diagnostics while
//! preserving first-emission order, so re-validating a shared include does
//! not multiply identical warnings.

use refdoc_model::Range;
use std::collections::HashSet;
use std::fmt;

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Structural mismatch; the build continues.
    Warning,
    /// Contract violation on the parser's side (e.g. a candidate section
    /// without a title).
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Error => write!(f, "error"),
        }
    }
}

/// A location-tagged structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub location: Range,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub code: Option<String>,
    /// The encoded token sequence that was actually seen.
    pub got: Option<String>,
    /// Description of the grammar the sequence was matched against.
    pub expected: Option<String>,
}

impl Diagnostic {
    pub fn new(location: Range, severity: DiagnosticSeverity, message: String) -> Self {
        Self {
            location,
            severity,
            message,
            code: None,
            got: None,
            expected: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the got/expected detail of a grammar mismatch.
    pub fn with_shapes(mut self, got: impl Into<String>, expected: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self.expected = Some(expected.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {} at {}", self.message, self.location)?;
        if let Some(got) = &self.got {
            write!(f, "\n  got: {}", got)?;
        }
        if let Some(expected) = &self.expected {
            write!(f, "\n  expected: {}", expected)?;
        }
        Ok(())
    }
}

/// Ordered, deduplicated diagnostic sink for one validation pass.
#[derive(Debug, Default)]
pub struct Reporter {
    seen: HashSet<Diagnostic>,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Returns false if an equal one was already seen.
    pub fn emit(&mut self, diagnostic: Diagnostic) -> bool {
        if self.seen.insert(diagnostic.clone()) {
            self.diagnostics.push(diagnostic);
            true
        } else {
            false
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdoc_model::{Position, Range};

    fn range() -> Range {
        Range::new(0..10, Position::new(3, 0), Position::new(3, 10))
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            range(),
            DiagnosticSeverity::Warning,
            "Class structure mismatch".to_string(),
        )
        .with_code("structure")
        .with_shapes(":title:seealso", ":title(:seealso)?");

        let rendered = diag.to_string();
        assert!(rendered.starts_with("warning [structure]: Class structure mismatch at 3:0..3:10"));
        assert!(rendered.contains("\n  got: :title:seealso"));
        assert!(rendered.contains("\n  expected: :title(:seealso)?"));
    }

    #[test]
    fn test_reporter_deduplicates() {
        let mut reporter = Reporter::new();
        let diag = Diagnostic::new(
            range(),
            DiagnosticSeverity::Warning,
            "Class structure mismatch".to_string(),
        );

        assert!(reporter.emit(diag.clone()));
        assert!(!reporter.emit(diag.clone()));
        assert_eq!(reporter.diagnostics().len(), 1);

        // A different location is a different diagnostic.
        let elsewhere = Diagnostic::new(
            Range::line(9),
            DiagnosticSeverity::Warning,
            "Class structure mismatch".to_string(),
        );
        assert!(reporter.emit(elsewhere));
        assert_eq!(reporter.diagnostics().len(), 2);
    }

    #[test]
    fn test_reporter_preserves_emission_order() {
        let mut reporter = Reporter::new();
        for line in [5, 2, 8] {
            reporter.emit(Diagnostic::new(
                Range::line(line),
                DiagnosticSeverity::Warning,
                "mismatch".to_string(),
            ));
        }
        let lines: Vec<_> = reporter
            .diagnostics()
            .iter()
            .map(|d| d.location.start.line)
            .collect();
        assert_eq!(lines, vec![5, 2, 8]);
    }
}
