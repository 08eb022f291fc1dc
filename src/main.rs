use anyhow::Result;
use arxiv_harvester::config::HarvestConfig;
use arxiv_harvester::export::ExportFormat;
use arxiv_harvester::pipeline;
use arxiv_harvester::source::ArxivClient;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arXiv Harvester - collect, deduplicate and export arXiv metadata for a
/// foundation-model literature survey
#[derive(Parser, Debug)]
#[command(name = "arxiv-harvester")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Harvest arXiv metadata and export it as CSV or BibTeX", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::All)]
    format: OutputFormat,

    /// Directory output files are written into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Minimum publication date (inclusive), ISO form
    #[arg(long, default_value = "2020-01-01")]
    cutoff: NaiveDate,

    /// Entries requested per API page
    #[arg(long, default_value_t = 200)]
    page_size: usize,

    /// Politeness delay between page fetches, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

/// Export format selection
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// CSV table only
    Csv,
    /// BibTeX bibliography only
    Bibtex,
    /// Both outputs
    All,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Bibtex => ExportFormat::Bibtex,
            OutputFormat::All => ExportFormat::All,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("arxiv_harvester={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarvestConfig {
        cutoff_date: cli.cutoff,
        page_size: cli.page_size,
        page_delay: Duration::from_millis(cli.delay_ms),
        output_dir: cli.output_dir,
        ..HarvestConfig::default()
    };

    let client = ArxivClient::new(&config)?;
    let summary = pipeline::run(&client, &config, cli.format.into()).await?;

    if !cli.quiet {
        println!(
            "Done. {} queries ({} aborted), {} records fetched, {} unique.",
            summary.queries, summary.failed_queries, summary.raw_records, summary.unique_records
        );
    }

    // Partial query failures are not fatal; the process still exits 0
    Ok(())
}
