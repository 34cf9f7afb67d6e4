//! Shared DTOs (schemas-as-code) for the rulecat workspace.
//!
//! # Design constraints
//! - These types are serialized into the static data file the configurator UI loads.
//! - Field names are camelCase on the wire because the UI reads them as-is.
//! - Prefer adding optional fields over changing semantics.

pub mod catalog;
pub mod index;
pub mod rules;
pub mod sample;

pub use catalog::{CatalogData, CodeSampleDescriptor, FixerDescriptor, OptionDescriptor};
pub use index::{DataIndex, LibraryInfo};
pub use rules::{OptionMap, RuleConfiguration, RuleSetDescriptor, RuleSetting};
pub use sample::{SampleFailure, SampleOperation, SampleResult};

/// Schema identifiers.
pub mod schema {
    pub const RULECAT_CATALOG_V1: &str = "rulecat.catalog.v1";
    pub const RULECAT_INDEX_V1: &str = "rulecat.index.v1";
}
