use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which step of running a code sample failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleOperation {
    Tokenize,
    Configure,
}

impl SampleOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            SampleOperation::Tokenize => "tokenize",
            SampleOperation::Configure => "configure",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "tokenize" => Some(SampleOperation::Tokenize),
            "configure" => Some(SampleOperation::Configure),
            _ => None,
        }
    }
}

/// A recoverable failure while producing a sample's rewritten text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFailure {
    pub operation: SampleOperation,
    /// Stable error kind reported by the fixer library (e.g. `ParseError`).
    pub kind: String,
    pub message: String,
}

impl SampleFailure {
    const PREFIX: &'static str = "*** ";
    const SUFFIX: &'static str = " ***";
    const FAILED_WITH: &'static str = " failed with ";

    /// Recover a failure from its sentinel rendering.
    pub fn from_sentinel(s: &str) -> Option<Self> {
        let body = s.strip_prefix(Self::PREFIX)?.strip_suffix(Self::SUFFIX)?;
        let (op, rest) = body.split_once(Self::FAILED_WITH)?;
        let (kind, message) = rest.split_once(": ")?;
        Some(SampleFailure {
            operation: SampleOperation::parse(op)?,
            kind: kind.to_string(),
            message: message.to_string(),
        })
    }
}

impl fmt::Display for SampleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}: {}{}",
            Self::PREFIX,
            self.operation.as_str(),
            Self::FAILED_WITH,
            self.kind,
            self.message,
            Self::SUFFIX
        )
    }
}

/// Outcome of running a fixer over a code sample.
///
/// Serialized as a plain string: the rewritten code, or the failure sentinel
/// `*** <operation> failed with <kind>: <message> ***`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleResult {
    Fixed(String),
    Failed(SampleFailure),
}

impl SampleResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, SampleResult::Failed(_))
    }

    pub fn fixed(&self) -> Option<&str> {
        match self {
            SampleResult::Fixed(code) => Some(code),
            SampleResult::Failed(_) => None,
        }
    }

    /// The string the UI shows in place of the rewritten code.
    pub fn render(&self) -> String {
        match self {
            SampleResult::Fixed(code) => code.clone(),
            SampleResult::Failed(failure) => failure.to_string(),
        }
    }
}

impl Serialize for SampleResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SampleResult::Fixed(code) => serializer.serialize_str(code),
            SampleResult::Failed(failure) => serializer.collect_str(failure),
        }
    }
}

/// The wire form is a plain string, so fixed code that happens to have the sentinel shape reads
/// back as `Failed`. The serialized text is unchanged either way; compare wire values, not parsed
/// results, when the distinction matters.
impl<'de> Deserialize<'de> for SampleResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match SampleFailure::from_sentinel(&s) {
            Some(failure) => SampleResult::Failed(failure),
            None => SampleResult::Fixed(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> SampleFailure {
        SampleFailure {
            operation: SampleOperation::Configure,
            kind: "UnknownOption".to_string(),
            message: "unknown option \"foo\"".to_string(),
        }
    }

    #[test]
    fn sentinel_has_documented_shape() {
        assert_eq!(
            failure().to_string(),
            "*** configure failed with UnknownOption: unknown option \"foo\" ***"
        );
    }

    #[test]
    fn sentinel_reads_back_as_failure() {
        let json = serde_json::to_string(&SampleResult::Failed(failure())).expect("serialize");
        let back: SampleResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, SampleResult::Failed(failure()));
    }

    #[test]
    fn message_with_colons_survives() {
        let f = SampleFailure {
            operation: SampleOperation::Tokenize,
            kind: "ParseError".to_string(),
            message: "line 2: unterminated string: '".to_string(),
        };
        assert_eq!(SampleFailure::from_sentinel(&f.to_string()), Some(f));
    }

    #[test]
    fn code_that_only_looks_similar_stays_fixed() {
        let code = "<?php\n/*** not a sentinel ***/\n";
        let back: SampleResult =
            serde_json::from_value(serde_json::json!(code)).expect("deserialize");
        assert_eq!(back, SampleResult::Fixed(code.to_string()));
    }

    #[test]
    fn sentinel_shaped_code_keeps_its_wire_text() {
        let code = "*** configure failed with X: y ***";
        let back: SampleResult =
            serde_json::from_value(serde_json::json!(code)).expect("deserialize");
        assert!(matches!(back, SampleResult::Failed(_)));
        assert_eq!(serde_json::to_value(&back).expect("serialize"), serde_json::json!(code));
        assert_ne!(back, SampleResult::Fixed(code.to_string()));
    }
}
