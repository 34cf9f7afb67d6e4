use crate::definition::FixerDefinition;
use crate::error::FixerError;
use crate::options::ConfigurationSchema;
use crate::tokens::Tokens;
use camino::{Utf8Path, Utf8PathBuf};
use rulecat_types::{OptionMap, RuleConfiguration};

/// The file a token stream belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContext {
    /// Code with no backing file (piped input, generic samples).
    Stdin,
    File(Utf8PathBuf),
}

impl FileContext {
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            FileContext::Stdin => None,
            FileContext::File(p) => Some(p),
        }
    }
}

/// Formatting defaults of a freshly constructed library configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDefaults {
    pub indent: String,
    pub line_ending: String,
}

/// A rule implementation that rewrites a token stream.
pub trait Fixer {
    fn name(&self) -> &str;

    /// Whether the rewrite may change program behavior.
    fn is_risky(&self) -> bool {
        false
    }

    /// Present only for fixers that accept options.
    fn configuration_schema(&self) -> Option<&ConfigurationSchema> {
        None
    }

    fn definition(&self) -> Option<FixerDefinition> {
        None
    }

    /// Apply options; `None` resets every option to its default.
    ///
    /// The configured state lasts until the next call.
    fn configure(&mut self, options: Option<&OptionMap>) -> Result<(), FixerError> {
        match options {
            None => Ok(()),
            Some(_) => Err(FixerError::NotConfigurable {
                fixer: self.name().to_string(),
            }),
        }
    }

    fn fix(&self, file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError>;
}

/// Registry side of a fixer library.
pub trait FixerLibrary {
    fn version(&self) -> String;

    /// Install root of the library; sample paths under it are machine-specific.
    fn root(&self) -> &Utf8Path;

    fn default_format(&self) -> FormatDefaults;

    fn tokenize(&self, code: &str) -> Result<Tokens, FixerError>;

    /// Fresh, unconfigured instances of every registered fixer.
    fn fixers(&self) -> Vec<Box<dyn Fixer>>;

    fn set_names(&self) -> Vec<String>;

    /// Expand one named set, alone, into its flat rule configuration.
    fn resolve_set(&self, name: &str) -> Result<RuleConfiguration, FixerError>;
}
