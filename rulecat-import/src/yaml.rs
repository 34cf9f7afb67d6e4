use crate::detect::Importer;
use crate::error::ImportError;
use crate::format::ImportFormat;
use crate::rules::rules_from_document;
use rulecat_types::RuleConfiguration;
use serde_json::Value;

/// A YAML mapping of rules, optionally nested under `rules:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlImporter;

impl Importer for YamlImporter {
    fn format(&self) -> ImportFormat {
        ImportFormat::Yaml
    }

    fn try_parse(&self, text: &str) -> Result<RuleConfiguration, ImportError> {
        if text.trim().is_empty() {
            return Err(ImportError::Empty);
        }
        let syntax = |message: String| ImportError::Syntax {
            format: ImportFormat::Yaml,
            message,
        };
        let document: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| syntax(e.to_string()))?;
        if !document.is_mapping() {
            return Err(ImportError::NotARuleMap {
                format: ImportFormat::Yaml,
            });
        }
        // Non-string keys have no JSON form.
        let document: Value = serde_json::to_value(document).map_err(|e| syntax(e.to_string()))?;
        rules_from_document(ImportFormat::Yaml, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rulecat_types::RuleSetting;
    use serde_json::json;

    #[test]
    fn nested_rules_mapping() {
        let text =
            "rules:\n  array_syntax:\n    syntax: long\n  elseif: ~\n  single_quote: false\n";
        let rules = YamlImporter.try_parse(text).expect("parse");
        assert_eq!(
            rules.keys().collect::<Vec<_>>(),
            ["array_syntax", "elseif", "single_quote"]
        );
        assert_eq!(
            rules["array_syntax"],
            RuleSetting::from_value(json!({ "syntax": "long" })).expect("setting")
        );
        assert_eq!(rules["elseif"], RuleSetting::Enabled);
        assert_eq!(rules["single_quote"], RuleSetting::Disabled);
    }

    #[test]
    fn scalars_and_sequences_are_rejected() {
        for text in ["just words", "- a\n- b\n", "42"] {
            assert_eq!(
                YamlImporter.try_parse(text).unwrap_err(),
                ImportError::NotARuleMap {
                    format: ImportFormat::Yaml
                },
                "{text}"
            );
        }
    }

    #[test]
    fn list_valued_rule_fails_the_whole_parse() {
        let err = YamlImporter.try_parse("a: true\nb: [1]\n").unwrap_err();
        assert!(matches!(err, ImportError::InvalidRule { ref rule, .. } if rule == "b"));
    }
}
