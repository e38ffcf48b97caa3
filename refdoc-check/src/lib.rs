//! # refdoc-check
//!
//! Structural conformance checking for API reference pages.
//!
//! Every documented class page, and every member subsection inside one, must
//! present its content in one fixed order (template parameters before
//! parameters, returns before exceptions, and so on). This crate enforces
//! that convention: it encodes a section's direct children into a linear
//! token sequence ([`encode`]), matches the sequence against one of two fixed
//! page grammars ([`grammar`]), and reports mismatches as location-tagged
//! diagnostics ([`report`]). As a side effect each validated document yields
//! a manifest of the class and member names it declares ([`manifest`]), used
//! downstream for cross-reference auditing.
//!
//! The crate has no command-line surface. The surrounding documentation build
//! wires a [`StructureChecker`] into its post-resolution hook and calls
//! [`StructureChecker::document_resolved`] once per resolved document.

pub mod checker;
pub mod encode;
pub mod error;
pub mod grammar;
pub mod manifest;
pub mod report;
pub mod token;
pub mod validate;

pub use checker::StructureChecker;
pub use encode::{encode_children, Encoding, IgnoreSet};
pub use error::CheckError;
pub use grammar::{Grammar, MatchResult, CLASS_PAGE, MEMBER_SECTION};
pub use manifest::{Manifest, ManifestEntry};
pub use report::{Diagnostic, DiagnosticSeverity, Reporter};
pub use token::{Companion, Token};
pub use validate::{validate_document, ValidationOutcome};
