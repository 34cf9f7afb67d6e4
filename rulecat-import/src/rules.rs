use crate::error::ImportError;
use crate::format::ImportFormat;
use rulecat_types::{RuleConfiguration, RuleSetting};
use serde_json::Value;

const RULES_KEY: &str = "rules";

/// Convert a parsed document into rules, unwrapping a lone `rules` key.
pub(crate) fn rules_from_document(
    format: ImportFormat,
    document: Value,
) -> Result<RuleConfiguration, ImportError> {
    let Value::Object(mut map) = document else {
        return Err(ImportError::NotARuleMap { format });
    };
    if map.len() == 1
        && map.get(RULES_KEY).is_some_and(Value::is_object)
        && let Some(Value::Object(inner)) = map.remove(RULES_KEY)
    {
        map = inner;
    }

    let mut rules = RuleConfiguration::new();
    for (rule, value) in map {
        let found = describe(&value);
        let Some(setting) = RuleSetting::from_value(value) else {
            return Err(ImportError::InvalidRule { rule, found });
        };
        rules.insert(rule, setting);
    }
    Ok(rules)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(_) => "a list".to_string(),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        other => other.to_string(),
    }
}
