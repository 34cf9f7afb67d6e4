//! Fixer lookup and listing for the `rulecat explain` and `rulecat list-fixers` commands.

use rulecat_types::{CatalogData, FixerDescriptor};
use serde::Serialize;

/// One line of `rulecat list-fixers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixerRow {
    pub name: String,
    pub risky: bool,
    pub configurable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Rows in catalog order.
pub fn fixer_rows(catalog: &CatalogData) -> Vec<FixerRow> {
    catalog
        .fixers
        .iter()
        .map(|(name, fixer)| FixerRow {
            name: name.clone(),
            risky: fixer.risky,
            configurable: fixer.is_configurable(),
            summary: fixer.summary.clone(),
        })
        .collect()
}

/// Find a fixer by name, ignoring case and treating `-` as `_`.
pub fn lookup_fixer<'a>(
    catalog: &'a CatalogData,
    query: &str,
) -> Option<(&'a str, &'a FixerDescriptor)> {
    let wanted = normalize(query);
    catalog
        .fixers
        .iter()
        .find(|(name, _)| normalize(name) == wanted)
        .map(|(name, fixer)| (name.as_str(), fixer))
}

/// Fixer names containing `query`, for "did you mean" hints.
pub fn suggest<'a>(catalog: &'a CatalogData, query: &str) -> Vec<&'a str> {
    let wanted = normalize(query);
    if wanted.is_empty() {
        return vec![];
    }
    catalog
        .fixers
        .keys()
        .filter(|name| normalize(name).contains(&wanted))
        .map(String::as_str)
        .collect()
}

pub fn list_fixer_names(catalog: &CatalogData) -> Vec<&str> {
    catalog.fixers.keys().map(String::as_str).collect()
}

/// Short flag column for text listings.
pub fn flags(row: &FixerRow) -> &'static str {
    match (row.risky, row.configurable) {
        (true, true) => "risky,config",
        (true, false) => "risky",
        (false, true) => "config",
        (false, false) => "-",
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "_")
}
