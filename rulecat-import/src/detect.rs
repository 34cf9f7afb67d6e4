use crate::error::ImportError;
use crate::format::ImportFormat;
use crate::json::JsonImporter;
use crate::php::PhpImporter;
use crate::yaml::YamlImporter;
use rulecat_types::RuleConfiguration;
use tracing::debug;

/// Parser for one pasted configuration format.
pub trait Importer {
    fn format(&self) -> ImportFormat;

    fn try_parse(&self, text: &str) -> Result<RuleConfiguration, ImportError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetectOutcome {
    Matched {
        format: ImportFormat,
        rules: RuleConfiguration,
    },
    Unrecognized,
}

impl DetectOutcome {
    pub fn rules(&self) -> Option<&RuleConfiguration> {
        match self {
            DetectOutcome::Matched { rules, .. } => Some(rules),
            DetectOutcome::Unrecognized => None,
        }
    }
}

/// The concrete importers, in detection priority order.
fn concrete() -> [Box<dyn Importer>; 3] {
    [
        Box::new(PhpImporter),
        Box::new(JsonImporter),
        Box::new(YamlImporter),
    ]
}

/// First importer in PHP, JSON, YAML order that accepts `text`.
pub fn detect_and_parse(text: &str) -> DetectOutcome {
    for importer in concrete() {
        match importer.try_parse(text) {
            Ok(rules) => {
                debug!(format = %importer.format(), rules = rules.len(), "import matched");
                return DetectOutcome::Matched {
                    format: importer.format(),
                    rules,
                };
            }
            Err(err) => debug!(format = %importer.format(), error = %err, "importer declined"),
        }
    }
    DetectOutcome::Unrecognized
}

/// Importer that delegates to [`detect_and_parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDetectImporter;

impl Importer for AutoDetectImporter {
    fn format(&self) -> ImportFormat {
        ImportFormat::Auto
    }

    fn try_parse(&self, text: &str) -> Result<RuleConfiguration, ImportError> {
        match detect_and_parse(text) {
            DetectOutcome::Matched { rules, .. } => Ok(rules),
            DetectOutcome::Unrecognized => Err(ImportError::Unrecognized),
        }
    }
}

pub struct Importers;

impl Importers {
    /// Auto-detection first, then every concrete importer.
    pub fn all() -> Vec<Box<dyn Importer>> {
        let mut all: Vec<Box<dyn Importer>> = vec![Box::new(AutoDetectImporter)];
        all.extend(concrete());
        all
    }

    pub fn for_format(format: ImportFormat) -> Box<dyn Importer> {
        match format {
            ImportFormat::Auto => Box::new(AutoDetectImporter),
            ImportFormat::Php => Box::new(PhpImporter),
            ImportFormat::Json => Box::new(JsonImporter),
            ImportFormat::Yaml => Box::new(YamlImporter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matched_format(text: &str) -> Option<ImportFormat> {
        match detect_and_parse(text) {
            DetectOutcome::Matched { format, .. } => Some(format),
            DetectOutcome::Unrecognized => None,
        }
    }

    #[test]
    fn priority_is_php_json_yaml() {
        assert_eq!(matched_format("<?php return ['a' => true];"), Some(ImportFormat::Php));
        assert_eq!(matched_format(r#"{"a": true}"#), Some(ImportFormat::Json));
        assert_eq!(matched_format("a: true\nb: false\n"), Some(ImportFormat::Yaml));
    }

    #[test]
    fn garbage_is_unrecognized() {
        for text in ["", "   ", "hello world", "[1, 2", "{{{", "- a\n- b"] {
            assert_eq!(detect_and_parse(text), DetectOutcome::Unrecognized, "{text:?}");
        }
    }

    #[test]
    fn menu_lists_auto_detect_first() {
        let formats: Vec<_> = Importers::all().iter().map(|i| i.format()).collect();
        assert_eq!(
            formats,
            [
                ImportFormat::Auto,
                ImportFormat::Php,
                ImportFormat::Json,
                ImportFormat::Yaml
            ]
        );
    }

    #[test]
    fn auto_detect_importer_reports_unrecognized_as_error() {
        assert_eq!(
            AutoDetectImporter.try_parse("nope").unwrap_err(),
            ImportError::Unrecognized
        );
        assert!(AutoDetectImporter.try_parse(r#"{"a": null}"#).is_ok());
    }

    #[test]
    fn for_format_returns_matching_importer() {
        for format in ImportFormat::ALL {
            assert_eq!(Importers::for_format(format).format(), format);
        }
    }
}
