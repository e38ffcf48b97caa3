//! Shared configuration loader for the refdoc toolchain.
//!
//! `defaults/refdoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`RefdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/refdoc.default.toml");

/// Top-level configuration consumed by refdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RefdocConfig {
    pub build: BuildConfig,
    pub checker: CheckerConfig,
}

/// Output layout of the documentation build.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Root directory for build artifacts, including per-document manifests.
    pub output_root: PathBuf,
}

/// Knobs exposed by the page-structure checker.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckerConfig {
    /// Turn structural mismatches into hard failures.
    pub strict: bool,
    /// Node kinds skipped entirely while encoding a page's children.
    pub ignored_kinds: Vec<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RefdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RefdocConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.build.output_root, PathBuf::from("build"));
        assert!(!config.checker.strict);
        assert!(config
            .checker
            .ignored_kinds
            .iter()
            .any(|kind| kind == "paragraph"));
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("checker.strict", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.checker.strict);
    }
}
