use camino::Utf8Path;
use rulecat_types::OptionMap;
use serde_json::Value;

/// Replacement for the library root in emitted data.
pub const ANONYMIZED_ROOT: &str = "/path/to/";

/// Rewrites strings rooted at a local directory so no machine path leaks into the catalog.
#[derive(Debug, Clone)]
pub struct PathAnonymizer {
    prefix: String,
}

impl PathAnonymizer {
    pub fn new(root: &Utf8Path) -> Self {
        let mut prefix = normalize(root.as_str());
        while prefix.ends_with('/') {
            prefix.pop();
        }
        prefix.push('/');
        Self { prefix }
    }

    /// The normalized root, always ending with `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `Some` with the anonymized form when `s` lies under the root.
    pub fn anonymize_str(&self, s: &str) -> Option<String> {
        let normalized = normalize(s);
        normalized
            .strip_prefix(&self.prefix)
            .map(|rest| format!("{ANONYMIZED_ROOT}{rest}"))
    }

    /// Rewrites every occurrence of the root inside free text, such as an error message.
    ///
    /// Both `/` and `\\` spellings of the root are matched. The bare root is replaced only where
    /// a path component ends, so sibling directories sharing its name as a prefix are left alone.
    pub fn anonymize_text(&self, text: &str) -> String {
        let root = &self.prefix[..self.prefix.len() - 1];
        if root.is_empty() {
            return text.to_string();
        }
        let text = replace_root(text, root, '/');
        replace_root(&text, &root.replace('/', "\\"), '\\')
    }

    pub fn anonymize(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => match self.anonymize_str(s) {
                Some(replaced) => Value::String(replaced),
                None => value.clone(),
            },
            Value::Array(items) => Value::Array(items.iter().map(|v| self.anonymize(v)).collect()),
            Value::Object(map) => Value::Object(self.anonymize_map(map)),
            other => other.clone(),
        }
    }

    pub fn anonymize_map(&self, map: &OptionMap) -> OptionMap {
        map.iter()
            .map(|(k, v)| (k.clone(), self.anonymize(v)))
            .collect()
    }
}

fn replace_root(text: &str, root: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find(root) {
        let after = &rest[at + root.len()..];
        out.push_str(&rest[..at]);
        if let Some(tail) = after.strip_prefix(separator) {
            out.push_str(ANONYMIZED_ROOT);
            rest = tail;
        } else if after.starts_with(|c: char| c.is_alphanumeric() || "_-.".contains(c)) {
            out.push_str(root);
            rest = after;
        } else {
            out.push_str(ANONYMIZED_ROOT.trim_end_matches('/'));
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn normalize(s: &str) -> String {
    s.replace('\\', "/")
}
