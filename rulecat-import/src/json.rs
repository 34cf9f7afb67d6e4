use crate::detect::Importer;
use crate::error::ImportError;
use crate::format::ImportFormat;
use crate::rules::rules_from_document;
use rulecat_types::RuleConfiguration;
use serde_json::Value;

/// `{"rule": true, ...}` or `{"rules": {...}}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonImporter;

impl Importer for JsonImporter {
    fn format(&self) -> ImportFormat {
        ImportFormat::Json
    }

    fn try_parse(&self, text: &str) -> Result<RuleConfiguration, ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::Empty);
        }
        let document: Value = serde_json::from_str(text).map_err(|e| ImportError::Syntax {
            format: ImportFormat::Json,
            message: e.to_string(),
        })?;
        rules_from_document(ImportFormat::Json, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rulecat_types::RuleSetting;

    #[test]
    fn keeps_document_order() {
        let rules = JsonImporter
            .try_parse(r#"{"z": true, "a": {"syntax": "short"}, "m": false}"#)
            .expect("parse");
        assert_eq!(rules.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(rules["m"], RuleSetting::Disabled);
    }

    #[test]
    fn syntax_errors_name_the_format() {
        let err = JsonImporter.try_parse("{\"a\": tru").unwrap_err();
        assert!(matches!(
            err,
            ImportError::Syntax {
                format: ImportFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn top_level_array_is_not_rules() {
        assert_eq!(
            JsonImporter.try_parse("[1, 2]").unwrap_err(),
            ImportError::NotARuleMap {
                format: ImportFormat::Json
            }
        );
    }
}
