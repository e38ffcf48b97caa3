//! Per-document name manifests
//!
//! Each validated document yields a manifest of the class and member names it
//! declares, in traversal order. The manifest is persisted as one text file
//! per document at `<output-root>/objects/<document-id>.txt` and fully
//! overwritten on every run; downstream cross-reference auditing reads these
//! files, so a manifest must be completely written before the pass returns.

use crate::error::CheckError;
use std::fs;
use std::path::{Path, PathBuf};

/// One declared class and its member names, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub class: String,
    pub members: Vec<String>,
}

/// Ordered name manifest for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new class entry; subsequent members attach to it.
    pub fn begin_class(&mut self, name: impl Into<String>) {
        self.entries.push(ManifestEntry {
            class: name.into(),
            members: Vec::new(),
        });
    }

    /// Attach a member to the most recently opened class.
    pub fn push_member(&mut self, name: impl Into<String>) {
        debug_assert!(
            !self.entries.is_empty(),
            "member recorded before any class entry"
        );
        if let Some(entry) = self.entries.last_mut() {
            entry.members.push(name.into());
        }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the manifest lines: `class: <name>` and, indented two spaces,
    /// `member: <name>`, one declaration per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str("class: ");
            out.push_str(&entry.class);
            out.push('\n');
            for member in &entry.members {
                out.push_str("  member: ");
                out.push_str(member);
                out.push('\n');
            }
        }
        out
    }

    /// Manifest path for a document identifier under an output root.
    ///
    /// Document identifiers may carry path separators ("iface/queue"); the
    /// resulting file nests accordingly.
    pub fn object_path(output_root: &Path, doc_id: &str) -> PathBuf {
        output_root.join("objects").join(format!("{doc_id}.txt"))
    }

    /// Overwrite the manifest file at `path`, creating parent directories.
    ///
    /// The file is fully written and closed before this returns; no reader
    /// may ever observe a partial manifest.
    pub fn write_to(&self, path: &Path) -> Result<(), CheckError> {
        let io = |source| CheckError::ManifestIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io)?;
        }
        fs::write(path, self.render()).map_err(io)
    }
}
