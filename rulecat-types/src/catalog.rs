use crate::rules::{OptionMap, RuleSetDescriptor};
use crate::sample::SampleResult;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The static data file consumed by the configurator UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Fixer name -> metadata, case-insensitively sorted by name.
    #[serde(default)]
    pub fixers: IndexMap<String, FixerDescriptor>,

    /// Set name -> resolved rules.
    #[serde(default)]
    pub sets: RuleSetDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixerDescriptor {
    #[serde(default, skip_serializing_if = "is_false")]
    pub risky: bool,

    /// Present only when the fixer accepts options; sorted by option name, case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Vec<OptionDescriptor>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risky_description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_samples: Vec<CodeSampleDescriptor>,
}

impl FixerDescriptor {
    pub fn is_configurable(&self) -> bool {
        self.configuration.is_some()
    }

    pub fn option(&self, name: &str) -> Option<&OptionDescriptor> {
        self.configuration
            .as_deref()
            .and_then(|opts| opts.iter().find(|o| o.name == name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDescriptor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `Some(Value::Null)` is a declared `null` default, distinct from no default at all.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "declared_value"
    )]
    pub default_value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<Vec<String>>,

    /// Scalars only. Omitted when any allowed value cannot be represented as data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSampleDescriptor {
    pub from: String,
    pub to: SampleResult,

    /// Options applied for this sample, with local paths anonymized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<OptionMap>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn declared_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
