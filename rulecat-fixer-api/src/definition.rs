use crate::fixer::FileContext;
use camino::Utf8PathBuf;
use rulecat_types::OptionMap;

/// Human-readable documentation of a fixer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixerDefinition {
    pub summary: String,
    pub description: String,
    pub risky_description: String,
    pub code_samples: Vec<CodeSample>,
}

impl FixerDefinition {
    pub fn new(summary: impl Into<String>, code_samples: Vec<CodeSample>) -> Self {
        Self {
            summary: summary.into(),
            code_samples,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_risky_description(mut self, risky_description: impl Into<String>) -> Self {
        self.risky_description = risky_description.into();
        self
    }
}

/// A documented example of a fixer's effect.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeSample {
    pub code: String,
    /// Options the sample is meant to be run with.
    pub configuration: Option<OptionMap>,
    /// Set for samples whose rewrite depends on the file they live in.
    pub file: Option<Utf8PathBuf>,
}

impl CodeSample {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            configuration: None,
            file: None,
        }
    }

    pub fn with_configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = configuration.as_object().cloned();
        self
    }

    pub fn for_file(mut self, file: impl Into<Utf8PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn file_context(&self) -> FileContext {
        match &self.file {
            Some(path) => FileContext::File(path.clone()),
            None => FileContext::Stdin,
        }
    }
}
