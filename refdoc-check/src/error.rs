//! Error types for validation passes

use crate::report::Diagnostic;
use std::fmt;
use std::path::PathBuf;

/// Hard failures of one document's validation pass.
///
/// Structural mismatches are not errors; they are reported as diagnostics and
/// validation continues. A pass fails only when its manifest cannot be
/// persisted, or when strict mode turns mismatches into a gate.
#[derive(Debug)]
pub enum CheckError {
    /// The per-document manifest file could not be written.
    ManifestIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Strict mode: the document produced structural diagnostics. The
    /// computed diagnostics are carried so the caller can still surface them.
    StructureMismatch { diagnostics: Vec<Diagnostic> },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::ManifestIo { path, source } => {
                write!(f, "failed to write manifest {}: {}", path.display(), source)
            }
            CheckError::StructureMismatch { diagnostics } => {
                write!(
                    f,
                    "document failed structure validation with {} diagnostic(s)",
                    diagnostics.len()
                )
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::ManifestIo { source, .. } => Some(source),
            CheckError::StructureMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_io_display_names_the_path() {
        let err = CheckError::ManifestIo {
            path: PathBuf::from("build/objects/queue.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("build/objects/queue.txt"));
        assert!(rendered.contains("denied"));
    }
}
