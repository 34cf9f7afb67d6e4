use crate::error::FixerError;
use regex::Regex;
use rulecat_types::OptionMap;
use serde_json::Value;

/// One value (or family of values) an option accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedValue {
    /// A literal: string, number, bool or null.
    Scalar(Value),
    /// Any string matching the regex.
    Pattern(String),
    /// A list whose every element is one of the given strings.
    Subset(Vec<String>),
}

impl AllowedValue {
    pub fn scalar(v: impl Into<Value>) -> Self {
        AllowedValue::Scalar(v.into())
    }

    /// Only scalars can be emitted as plain data.
    pub fn is_scalar(&self) -> bool {
        match self {
            AllowedValue::Scalar(v) => !v.is_array() && !v.is_object(),
            _ => false,
        }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            AllowedValue::Scalar(v) => v == value,
            AllowedValue::Pattern(pattern) => match (value.as_str(), Regex::new(pattern)) {
                (Some(s), Ok(re)) => re.is_match(s),
                _ => false,
            },
            AllowedValue::Subset(items) => value.as_array().is_some_and(|values| {
                values
                    .iter()
                    .all(|v| v.as_str().is_some_and(|s| items.iter().any(|i| i == s)))
            }),
        }
    }
}

/// Declared option of a configurable fixer.
#[derive(Debug, Clone, PartialEq)]
pub struct FixerOption {
    pub name: String,
    pub description: String,
    /// `None` means the option is required.
    pub default: Option<Value>,
    pub allowed_types: Option<Vec<String>>,
    pub allowed_values: Option<Vec<AllowedValue>>,
}

impl FixerOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: None,
            allowed_types: None,
            allowed_values: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_allowed_types(mut self, types: &[&str]) -> Self {
        self.allowed_types = Some(types.iter().map(|t| (*t).to_string()).collect());
        self
    }

    pub fn with_allowed_values(mut self, values: Vec<AllowedValue>) -> Self {
        self.allowed_values = Some(values);
        self
    }

    fn validate(&self, value: &Value) -> Result<(), FixerError> {
        if let Some(types) = &self.allowed_types {
            let found = value_type_name(value);
            if !types.iter().any(|t| t == found || (t == "float" && found == "int")) {
                return Err(FixerError::InvalidOptionType {
                    option: self.name.clone(),
                    expected: types.join(" | "),
                    found: found.to_string(),
                });
            }
        }
        if let Some(allowed) = &self.allowed_values
            && !allowed.iter().any(|a| a.accepts(value))
        {
            return Err(FixerError::InvalidOptionValue {
                option: self.name.clone(),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

/// Option schema of a configurable fixer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationSchema {
    options: Vec<FixerOption>,
}

impl ConfigurationSchema {
    pub fn new(options: Vec<FixerOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[FixerOption] {
        &self.options
    }

    /// Validate user-supplied options and fill in defaults.
    ///
    /// `None` resolves every option to its default.
    pub fn resolve(&self, input: Option<&OptionMap>) -> Result<OptionMap, FixerError> {
        let empty = OptionMap::new();
        let input = input.unwrap_or(&empty);

        if let Some(unknown) = input
            .keys()
            .find(|k| !self.options.iter().any(|o| &o.name == *k))
        {
            return Err(FixerError::UnknownOption {
                option: unknown.clone(),
            });
        }

        let mut resolved = OptionMap::new();
        for option in &self.options {
            let value = match (input.get(&option.name), &option.default) {
                (Some(v), _) => {
                    option.validate(v)?;
                    v.clone()
                }
                (None, Some(default)) => default.clone(),
                (None, None) => {
                    return Err(FixerError::MissingOption {
                        option: option.name.clone(),
                    });
                }
            };
            resolved.insert(option.name.clone(), value);
        }
        Ok(resolved)
    }
}

/// Type name of a JSON value, in the vocabulary used by `allowed_types`.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "array",
    }
}
