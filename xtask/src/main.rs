use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fs_err as fs;
use rulecat_builtin::BuiltinLibrary;
use rulecat_cli::output;
use rulecat_extract::CatalogExtractor;
use serde_json::Value;
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by rulecat.
    PrintSchemas,
    /// Regenerate the committed data directory from the built-in library.
    RegenData {
        #[arg(long, default_value = "data")]
        dir: Utf8PathBuf,
    },
    /// Fail if the committed data file differs from a fresh extraction.
    CheckData {
        #[arg(long, default_value = "data")]
        dir: Utf8PathBuf,
    },
    /// Run the import fuzz target for a bounded time.
    Fuzz {
        #[arg(long, default_value = "import_detect")]
        target: String,
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", rulecat_types::schema::RULECAT_CATALOG_V1);
            println!("{}", rulecat_types::schema::RULECAT_INDEX_V1);
        }
        Command::RegenData { dir } => {
            let library = BuiltinLibrary::new();
            let extractor = CatalogExtractor::new(&library);
            let catalog = extractor.extract().context("extract catalog")?;
            let path = output::write_catalog(&dir, &catalog, &extractor.library_info(), true)?;
            println!("regenerated {path}");
        }
        Command::CheckData { dir } => {
            let library = BuiltinLibrary::new();
            let extractor = CatalogExtractor::new(&library);
            let fresh = extractor.extract().context("extract catalog")?;
            let path = output::data_file_path(&dir, &extractor.version());
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read {path} (run `cargo xtask regen-data`)"))?;
            // Sample outputs are compared as text; parsing them is lossy for sentinel-shaped code.
            let committed: Value =
                serde_json::from_str(&contents).with_context(|| format!("parse {path}"))?;
            if committed != serde_json::to_value(&fresh)? {
                anyhow::bail!("{path} is stale; run `cargo xtask regen-data`");
            }
            let index = output::read_index(&dir)?;
            if index.get(&extractor.version()) != Some(&extractor.library_info()) {
                anyhow::bail!("versions.json entry for {} is stale", extractor.version());
            }
            println!("{path} is up to date");
        }
        Command::Fuzz { target, seconds } => {
            let status = ProcessCommand::new("cargo")
                .args(["fuzz", "run", &target, "--", &format!("-max_total_time={seconds}")])
                .status()
                .context("run cargo fuzz")?;
            if !status.success() {
                anyhow::bail!("fuzz target {target} failed");
            }
        }
    }
    Ok(())
}
