//! Import of pasted rule configuration fragments.
//!
//! Users paste whatever they have: a PHP config file, a JSON document or a YAML mapping.
//! [`detect_and_parse`] tries each importer in a fixed order and reports the first that
//! understands the text. Importers are tolerant of wrappers (`->setRules(...)`, a `rules` key)
//! but strict about rule values.

mod detect;
mod error;
mod format;
mod json;
mod php;
mod rules;
mod yaml;

pub use detect::{AutoDetectImporter, DetectOutcome, Importer, Importers, detect_and_parse};
pub use error::ImportError;
pub use format::ImportFormat;
pub use json::JsonImporter;
pub use php::PhpImporter;
pub use yaml::YamlImporter;
