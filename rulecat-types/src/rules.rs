use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Options object passed to a fixer (option name -> value), in declaration order.
pub type OptionMap = serde_json::Map<String, Value>;

/// Rule name -> setting, in the order the rules were declared or resolved.
pub type RuleConfiguration = IndexMap<String, RuleSetting>;

/// Set name -> the set's flat rule configuration.
pub type RuleSetDescriptor = IndexMap<String, RuleConfiguration>;

/// How a single rule is switched on (or off) in a rule configuration.
///
/// On the wire:
/// - `Enabled` is `null` (library defaults apply); `true` is accepted when reading
/// - `Configured` is the options object
/// - `Disabled` is `false`; resolved rule sets never contain it, only imported configs do
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    Enabled,
    Disabled,
    Configured(OptionMap),
}

impl RuleSetting {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, RuleSetting::Disabled)
    }

    pub fn options(&self) -> Option<&OptionMap> {
        match self {
            RuleSetting::Configured(map) => Some(map),
            _ => None,
        }
    }

    /// Convert a loosely-typed value (as found in a config document) into a setting.
    ///
    /// Returns `None` for values that cannot describe a rule (numbers, strings, lists).
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(true) => Some(RuleSetting::Enabled),
            Value::Bool(false) => Some(RuleSetting::Disabled),
            Value::Object(map) => Some(RuleSetting::Configured(map)),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            RuleSetting::Enabled => Value::Null,
            RuleSetting::Disabled => Value::Bool(false),
            RuleSetting::Configured(map) => Value::Object(map.clone()),
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RuleSetting::Enabled => serializer.serialize_none(),
            RuleSetting::Disabled => serializer.serialize_bool(false),
            RuleSetting::Configured(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RuleSetting::from_value(value).ok_or_else(|| {
            D::Error::custom("rule setting must be null, a boolean, or an options object")
        })
    }
}
