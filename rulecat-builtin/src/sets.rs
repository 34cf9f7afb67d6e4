//! Named rule sets and their resolution into flat rule configurations.
//!
//! A set lists rules (`name => true | false | {options}`) and may pull in other sets
//! (`"@Other" => true`). Entries apply in order, so later entries override earlier ones and
//! `false` removes a rule (or every rule of a set) that was enabled before.

use rulecat_fixer_api::{FixerError, RuleConfiguration, RuleSetting};
use serde_json::{Value, json};

/// A set's raw definition.
#[derive(Debug, Clone)]
pub struct SetDefinition {
    pub name: &'static str,
    pub rules: Value,
}

pub fn builtin_sets() -> Vec<SetDefinition> {
    vec![
        SetDefinition {
            name: "@PSR2",
            rules: json!({
                "elseif": true,
                "indentation_type": true,
                "lowercase_keywords": true,
                "no_closing_tag": true,
                "no_trailing_whitespace": true,
            }),
        },
        SetDefinition {
            name: "@Symfony",
            rules: json!({
                "@PSR2": true,
                "array_syntax": true,
                "blank_line_before_statement": { "statements": ["return"] },
                "single_quote": true,
            }),
        },
        SetDefinition {
            name: "@Symfony:risky",
            rules: json!({
                "psr_autoloading": true,
                "strict_comparison": true,
            }),
        },
        SetDefinition {
            name: "@PhpCsFixer",
            rules: json!({
                "@Symfony": true,
                "blank_line_before_statement": {
                    "statements": ["break", "continue", "declare", "return", "throw", "try"]
                },
            }),
        },
        SetDefinition {
            name: "@PhpCsFixer:risky",
            rules: json!({
                "@Symfony:risky": true,
            }),
        },
    ]
}

/// Expand `name` alone, as if it were the only set enabled.
pub fn resolve(definitions: &[SetDefinition], name: &str) -> Result<RuleConfiguration, FixerError> {
    let mut out = RuleConfiguration::new();
    let mut stack = Vec::new();
    expand(definitions, name, &mut stack, &mut out)?;
    Ok(out)
}

fn expand<'a>(
    definitions: &'a [SetDefinition],
    name: &str,
    stack: &mut Vec<&'a str>,
    out: &mut RuleConfiguration,
) -> Result<(), FixerError> {
    let Some(def) = definitions.iter().find(|d| d.name == name) else {
        return Err(FixerError::UnknownSet {
            name: name.to_string(),
        });
    };
    if stack.contains(&def.name) {
        return Err(FixerError::RecursiveSet {
            name: name.to_string(),
        });
    }
    stack.push(def.name);

    let Some(rules) = def.rules.as_object() else {
        return Err(FixerError::InvalidSet {
            name: name.to_string(),
            message: "not a rule map".to_string(),
        });
    };
    for (rule, value) in rules {
        if rule.starts_with('@') {
            match value {
                Value::Bool(false) => {
                    let mut nested = RuleConfiguration::new();
                    expand(definitions, rule, stack, &mut nested)?;
                    for key in nested.keys() {
                        out.shift_remove(key);
                    }
                }
                _ => expand(definitions, rule, stack, out)?,
            }
            continue;
        }
        match RuleSetting::from_value(value.clone()) {
            Some(RuleSetting::Disabled) => {
                out.shift_remove(rule);
            }
            Some(setting) => {
                out.insert(rule.clone(), setting);
            }
            None => {
                return Err(FixerError::InvalidSet {
                    name: name.to_string(),
                    message: format!("rule \"{rule}\" has an invalid value"),
                });
            }
        }
    }

    stack.pop();
    Ok(())
}
