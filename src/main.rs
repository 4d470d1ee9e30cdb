use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paintmatch::models::{CatalogColor, MatchConfig};
use paintmatch::services::{
    backfill_derived, undertone_for_hex, CandidateRetriever, ColorMatcher, InMemoryCatalog,
};

#[derive(Parser)]
#[command(name = "paintmatch")]
#[command(about = "Perceptual paint color matching against brand catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Match colors against a catalog file
    Match {
        /// Input colors as comma-separated 6-digit hex (e.g. "#4A90D9,#D6C9A7")
        #[arg(short, long)]
        colors: String,

        /// Catalog file (JSON array of catalog colors)
        #[arg(long)]
        catalog: PathBuf,

        /// Restrict matches to one brand slug
        #[arg(short, long)]
        brand: Option<String>,

        /// YAML config file overriding matching defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Classify the undertone of a color
    Undertone {
        /// Input color as 6-digit hex
        #[arg(short, long)]
        color: String,

        /// Measured Lab a component, when available
        #[arg(long)]
        lab_a: Option<f64>,

        /// Measured Lab b component, when available
        #[arg(long)]
        lab_b: Option<f64>,
    },
    /// Fill missing Lab values across a catalog file
    Backfill {
        /// Catalog file to enrich (JSON array of catalog colors)
        #[arg(long)]
        catalog: PathBuf,

        /// Output file for the enriched catalog
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Match {
            colors,
            catalog,
            brand,
            config,
            json,
        }) => run_match_command(&colors, &catalog, brand.as_deref(), config.as_deref(), json).await,
        Some(Commands::Undertone {
            color,
            lab_a,
            lab_b,
        }) => run_undertone_command(&color, lab_a, lab_b),
        Some(Commands::Backfill { catalog, output }) => run_backfill_command(&catalog, &output),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paintmatch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Read a catalog file (JSON array of catalog colors)
fn load_catalog(path: &Path) -> anyhow::Result<Vec<CatalogColor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let records: Vec<CatalogColor> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    Ok(records)
}

/// Match colors against a catalog file (no server needed)
async fn run_match_command(
    colors: &str,
    catalog_path: &Path,
    brand: Option<&str>,
    config_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = match config_path {
        Some(path) => MatchConfig::load_from_path(path),
        None => MatchConfig::default(),
    };

    let records = load_catalog(catalog_path)?;
    tracing::debug!(colors = records.len(), "Loaded catalog");

    let store = Arc::new(InMemoryCatalog::from_records(records));
    let retriever = CandidateRetriever::new(store, config.retrieval);
    let matcher = ColorMatcher::new(retriever, config.ranking);

    let inputs: Vec<String> = colors.split(',').map(|s| s.trim().to_string()).collect();
    let results = matcher.match_palette(&inputs, brand).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for palette in &results {
        println!("Matches for {}:", palette.input);
        if palette.matches.is_empty() {
            println!("  (no catalog colors within the search range)");
        }
        for m in &palette.matches {
            println!(
                "  {:>6.2}  {}  {:<28} {:<10} {}",
                m.delta_e, m.hex, m.name, m.color_number, m.brand.name
            );
        }
        println!();
    }

    Ok(())
}

/// Classify the undertone of a color
fn run_undertone_command(
    color: &str,
    lab_a: Option<f64>,
    lab_b: Option<f64>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let lab_ab = match (lab_a, lab_b) {
        (Some(a), Some(b)) => Some((a, b)),
        (None, None) => None,
        _ => anyhow::bail!("--lab-a and --lab-b must be given together"),
    };

    let undertone = undertone_for_hex(color, lab_ab)?;
    println!("{undertone} ({} family)", undertone.family());

    Ok(())
}

/// Fill missing Lab values across a catalog file
fn run_backfill_command(catalog_path: &Path, output: &Path) -> anyhow::Result<()> {
    init_cli_tracing();

    let mut records = load_catalog(catalog_path)?;
    let stats = backfill_derived(&mut records);

    let content = serde_json::to_string_pretty(&records)?;
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Scanned {} colors, derived Lab for {}",
        stats.scanned, stats.derived
    );
    println!("\nUndertone distribution:");
    let mut counts: Vec<_> = stats.undertones.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_label().cmp(b.0.as_label())));
    for (undertone, count) in counts {
        println!("  {:<10} {count}", undertone.as_label());
    }

    Ok(())
}

/// Display version and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Paintmatch v{VERSION} - perceptual paint color matching");
    println!("Ranks brand catalog colors by CIEDE2000 distance\n");

    println!("Commands:");
    println!("  paintmatch match      Match hex colors against a catalog file");
    println!("  paintmatch undertone  Classify the undertone of a color");
    println!("  paintmatch backfill   Fill missing Lab values in a catalog file");
    println!("\nRun 'paintmatch --help' for more details.");
}
