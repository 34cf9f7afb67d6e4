//! Catalog extraction: turn a fixer library into the static rulecat data file.
//!
//! This crate owns *what* ends up in the catalog and in which order. Writing the file to disk is
//! the CLI's job.

mod anonymize;
mod extractor;

pub use anonymize::{ANONYMIZED_ROOT, PathAnonymizer};
pub use extractor::CatalogExtractor;
