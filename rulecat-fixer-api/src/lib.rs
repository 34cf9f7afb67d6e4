//! Shared contracts between rulecat and the fixer library it introspects.
//!
//! A library exposes a registry of [`Fixer`]s and named rule sets through [`FixerLibrary`].
//! Optional capabilities (an option schema, a human-readable definition, file-specific
//! samples) are modelled as optional sub-records instead of runtime type tests.

mod definition;
mod error;
mod fixer;
mod options;
mod tokens;

pub use definition::{CodeSample, FixerDefinition};
pub use error::FixerError;
pub use fixer::{FileContext, Fixer, FixerLibrary, FormatDefaults};
pub use options::{AllowedValue, ConfigurationSchema, FixerOption, value_type_name};
pub use tokens::{Token, TokenKind, Tokens};

pub use rulecat_types::{OptionMap, RuleConfiguration, RuleSetting};
