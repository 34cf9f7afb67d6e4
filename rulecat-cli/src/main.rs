use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;
use rulecat_builtin::BuiltinLibrary;
use rulecat_cli::config::{self, ConfigMerger};
use rulecat_cli::{explain, output};
use rulecat_extract::CatalogExtractor;
use rulecat_import::{DetectOutcome, ImportFormat, Importers, detect_and_parse};
use rulecat_render::{render_catalog_md, render_fixer_md};
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Exit code for input that no importer understood.
const EXIT_UNRECOGNIZED: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "rulecat",
    version,
    about = "Fixer catalog extraction and rule configuration import."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract the built-in fixer library into `<version>.json` and `versions.json`.
    Extract(ExtractArgs),
    /// List all fixers with their risky/configurable flags.
    ListFixers(ListFixersArgs),
    /// Show the reference page of one fixer, with sample diffs.
    Explain(ExplainArgs),
    /// Parse a pasted PHP, JSON or YAML rule configuration and print it as JSON.
    Import(ImportArgs),
}

#[derive(Debug, Parser)]
struct ExtractArgs {
    /// Output directory (default: `[extract] out_dir` from rulecat.toml, else `data`).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Write single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Debug, Parser)]
struct ListFixersArgs {
    /// Output format (text, json, markdown).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Fixer name (case-insensitive, `-` and `_` are interchangeable).
    fixer: String,
}

#[derive(Debug, Parser)]
struct ImportArgs {
    /// File to read; `-` or nothing reads stdin.
    path: Option<Utf8PathBuf>,

    /// Input format (default: `[import] format` from rulecat.toml, else auto).
    #[arg(long)]
    format: Option<ImportFormat>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_config =
        config::load_or_default(Utf8Path::new(".")).context("load rulecat.toml config")?;
    let merger = ConfigMerger::new(file_config);

    match cli.cmd {
        Command::Extract(args) => cmd_extract(args, merger),
        Command::ListFixers(args) => cmd_list_fixers(args),
        Command::Explain(args) => cmd_explain(args),
        Command::Import(args) => cmd_import(args, merger),
    }
}

fn cmd_extract(args: ExtractArgs, merger: ConfigMerger) -> anyhow::Result<ExitCode> {
    let merged = merger.merge_extract_args(args.out_dir, args.compact);
    debug!("merged config: {:?}", merged);

    let library = BuiltinLibrary::new();
    let extractor = CatalogExtractor::new(&library);
    let catalog = extractor.extract().context("extract catalog")?;
    let info = extractor.library_info();

    let path = output::write_catalog(&merged.out_dir, &catalog, &info, merged.pretty)?;
    println!("{}", path);
    Ok(ExitCode::SUCCESS)
}

fn cmd_list_fixers(args: ListFixersArgs) -> anyhow::Result<ExitCode> {
    let library = BuiltinLibrary::new();
    let extractor = CatalogExtractor::new(&library);
    let catalog = extractor.extract().context("extract catalog")?;
    let rows = explain::fixer_rows(&catalog);

    match args.format {
        OutputFormat::Text => {
            println!("Available fixers:\n");
            println!("  {:<32} {:<14} SUMMARY", "NAME", "FLAGS");
            println!("  {:<32} {:<14} -------", "----", "-----");
            for row in &rows {
                println!(
                    "  {:<32} {:<14} {}",
                    row.name,
                    explain::flags(row),
                    row.summary.as_deref().unwrap_or("")
                );
            }
            println!();
            println!("Use 'rulecat explain <fixer>' for details.");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Markdown => {
            print!("{}", render_catalog_md(&catalog, Some(&extractor.library_info())));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<ExitCode> {
    let library = BuiltinLibrary::new();
    let catalog = CatalogExtractor::new(&library)
        .extract()
        .context("extract catalog")?;

    let Some((name, fixer)) = explain::lookup_fixer(&catalog, &args.fixer) else {
        let suggestions = explain::suggest(&catalog, &args.fixer);
        let hint = if suggestions.is_empty() {
            format!(
                "Available fixers: {}",
                explain::list_fixer_names(&catalog).join(", ")
            )
        } else {
            format!("Did you mean: {}", suggestions.join(", "))
        };
        anyhow::bail!("Unknown fixer: '{}'\n\n{}", args.fixer, hint);
    };

    print!("{}", render_fixer_md(name, fixer));
    Ok(ExitCode::SUCCESS)
}

fn cmd_import(args: ImportArgs, merger: ConfigMerger) -> anyhow::Result<ExitCode> {
    let format = merger.merge_import_args(args.format);
    let text = read_input(args.path.as_deref())?;

    let outcome = match format {
        ImportFormat::Auto => detect_and_parse(&text),
        forced => match Importers::for_format(forced).try_parse(&text) {
            Ok(rules) => DetectOutcome::Matched {
                format: forced,
                rules,
            },
            Err(err) => {
                eprintln!("Could not import as {}: {}", forced, err);
                return Ok(ExitCode::from(EXIT_UNRECOGNIZED));
            }
        },
    };

    match outcome {
        DetectOutcome::Matched { format, rules } => {
            info!("imported {} rules as {}", rules.len(), format);
            println!("{}", serde_json::to_string_pretty(&rules)?);
            Ok(ExitCode::SUCCESS)
        }
        DetectOutcome::Unrecognized => {
            eprintln!("Unrecognized configuration: expected PHP, JSON or YAML rules.");
            Ok(ExitCode::from(EXIT_UNRECOGNIZED))
        }
    }
}

fn read_input(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("read {}", path))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            Ok(text)
        }
    }
}
