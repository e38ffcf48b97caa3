//! Post-resolution hook
//!
//! The documentation build wires one [`StructureChecker`] into its
//! "document resolved" hook and calls [`StructureChecker::document_resolved`]
//! once per document, one document at a time. The checker holds no mutable
//! state, so a pipeline that resolves documents concurrently may share one
//! instance as long as each document writes to its own manifest path.

use crate::encode::IgnoreSet;
use crate::error::CheckError;
use crate::manifest::Manifest;
use crate::report::Diagnostic;
use crate::validate::validate_document;
use refdoc_config::RefdocConfig;
use refdoc_model::Node;
use std::path::{Path, PathBuf};

/// The structure checker as seen by the surrounding build pipeline.
#[derive(Debug, Clone)]
pub struct StructureChecker {
    output_root: PathBuf,
    ignore: IgnoreSet,
    strict: bool,
}

impl StructureChecker {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            ignore: IgnoreSet::default(),
            strict: false,
        }
    }

    /// Build a checker from a loaded toolchain configuration.
    pub fn from_config(config: &RefdocConfig) -> Self {
        Self {
            output_root: config.build.output_root.clone(),
            ignore: IgnoreSet::from_kinds(config.checker.ignored_kinds.iter().cloned()),
            strict: config.checker.strict,
        }
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// When strict, structural diagnostics fail the document's pass.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Manifest path this checker will write for a document identifier.
    pub fn manifest_path(&self, doc_id: &str) -> PathBuf {
        Manifest::object_path(&self.output_root, doc_id)
    }

    /// Validate one resolved document.
    ///
    /// Persists the document's manifest (fully written before returning) and
    /// hands the structural diagnostics back for the pipeline's logging
    /// channel. Diagnostics never abort the pass unless strict mode is on;
    /// even then they ride along inside the error.
    pub fn document_resolved(
        &self,
        doc_id: &str,
        tree: &Node,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        let outcome = validate_document(tree, &self.ignore);
        outcome.manifest.write_to(&self.manifest_path(doc_id))?;

        if self.strict && !outcome.diagnostics.is_empty() {
            return Err(CheckError::StructureMismatch {
                diagnostics: outcome.diagnostics,
            });
        }
        Ok(outcome.diagnostics)
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}
