use serde::{Deserialize, Serialize};

/// Per-version entry of the data index (`versions.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryInfo {
    /// Version string of the introspected fixer library.
    pub version: String,

    /// Default whitespace unit used for indentation.
    pub indent: String,

    /// Default newline convention.
    pub line_ending: String,
}

/// Index of every extracted data file in an output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataIndex {
    pub schema: String,

    #[serde(default)]
    pub versions: Vec<LibraryInfo>,
}

impl Default for DataIndex {
    fn default() -> Self {
        Self {
            schema: crate::schema::RULECAT_INDEX_V1.to_string(),
            versions: vec![],
        }
    }
}

impl DataIndex {
    /// Insert or replace the entry for `info.version`, keeping entries sorted by version.
    pub fn upsert(&mut self, info: LibraryInfo) {
        self.versions.retain(|v| v.version != info.version);
        self.versions.push(info);
        self.versions.sort_by(|a, b| a.version.cmp(&b.version));
    }

    pub fn get(&self, version: &str) -> Option<&LibraryInfo> {
        self.versions.iter().find(|v| v.version == version)
    }
}
