use crate::error::ImportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// Try every concrete format in priority order.
    #[default]
    Auto,
    Php,
    Json,
    Yaml,
}

impl ImportFormat {
    pub const ALL: [ImportFormat; 4] = [
        ImportFormat::Auto,
        ImportFormat::Php,
        ImportFormat::Json,
        ImportFormat::Yaml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImportFormat::Auto => "auto",
            ImportFormat::Php => "php",
            ImportFormat::Json => "json",
            ImportFormat::Yaml => "yaml",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ImportFormat::Auto => "Auto-detect",
            ImportFormat::Php => "PHP",
            ImportFormat::Json => "JSON",
            ImportFormat::Yaml => "YAML",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ImportFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ImportFormat::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .or_else(|| wanted.eq_ignore_ascii_case("yml").then_some(ImportFormat::Yaml))
            .ok_or_else(|| ImportError::UnknownFormat(s.to_string()))
    }
}
