//! Configuration file loading for rulecat.
//!
//! Discovers and loads `rulecat.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use rulecat_import::ImportFormat;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "rulecat.toml";

/// Output directory used when neither the CLI nor the config names one.
pub const DEFAULT_OUT_DIR: &str = "data";

/// Top-level configuration from rulecat.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulecatConfig {
    pub extract: ExtractConfig,
    pub import: ImportConfig,
}

/// Extract section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Directory receiving `<version>.json` and `versions.json`.
    pub out_dir: Option<Utf8PathBuf>,

    /// Pretty-print the data files.
    pub pretty: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            out_dir: None,
            pretty: true,
        }
    }
}

/// Import section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    pub format: ImportFormat,
}

/// Discover the rulecat.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a rulecat.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<RulecatConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<RulecatConfig> {
    let config: RulecatConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return the default if there is none.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<RulecatConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(RulecatConfig::default()),
    }
}

/// Effective settings of one `extract` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedExtract {
    pub out_dir: Utf8PathBuf,
    pub pretty: bool,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: RulecatConfig,
}

impl ConfigMerger {
    pub fn new(config: RulecatConfig) -> Self {
        Self { config }
    }

    /// `--out-dir` replaces the configured directory; `--compact` forces compact output.
    pub fn merge_extract_args(
        self,
        cli_out_dir: Option<Utf8PathBuf>,
        compact: bool,
    ) -> MergedExtract {
        let out_dir = cli_out_dir
            .or(self.config.extract.out_dir)
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUT_DIR));
        MergedExtract {
            out_dir,
            pretty: self.config.extract.pretty && !compact,
        }
    }

    pub fn merge_import_args(self, cli_format: Option<ImportFormat>) -> ImportFormat {
        cli_format.unwrap_or(self.config.import.format)
    }
}
