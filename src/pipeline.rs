//! End-to-end harvest orchestration.
//!
//! Fully sequential: one query at a time, one page at a time. A failed page
//! only stops its own query's pagination; the run always proceeds to the
//! export stage.

use anyhow::Result;
use tracing::{info, warn};

use crate::config::HarvestConfig;
use crate::dedup::deduplicate_records;
use crate::export::{write_bibtex, write_csv, ExportFormat};
use crate::models::Record;
use crate::query::generate_queries;
use crate::source::ArxivClient;

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarvestSummary {
    /// Queries executed
    pub queries: usize,
    /// Queries whose pagination was aborted by a page failure
    pub failed_queries: usize,
    /// Records accumulated before deduplication
    pub raw_records: usize,
    /// Records surviving deduplication
    pub unique_records: usize,
}

/// Run the full pipeline: generate queries, harvest each one into a single
/// owned accumulator, deduplicate, export.
pub async fn run(
    client: &ArxivClient,
    config: &HarvestConfig,
    format: ExportFormat,
) -> Result<HarvestSummary> {
    let queries = generate_queries(config);
    let mut summary = HarvestSummary {
        queries: queries.len(),
        ..HarvestSummary::default()
    };

    let mut records: Vec<Record> = Vec::new();
    for query in &queries {
        let stats = client
            .harvest_query(query, config.cutoff_date, &mut records)
            .await;
        if stats.failed {
            summary.failed_queries += 1;
        }
        info!(
            "Query done: {} ({} pages, {} records kept{})",
            query,
            stats.pages,
            stats.kept,
            if stats.failed { ", aborted" } else { "" }
        );
    }
    summary.raw_records = records.len();

    let records = deduplicate_records(records);
    summary.unique_records = records.len();

    export(&records, config, format)?;

    Ok(summary)
}

/// Export the deduplicated record set in the selected format(s).
pub fn export(records: &[Record], config: &HarvestConfig, format: ExportFormat) -> Result<()> {
    if format.includes_csv() {
        let path = config.csv_path();
        if write_csv(records, &path)? {
            info!("Saved {} deduplicated records to {}", records.len(), path.display());
        } else {
            warn!("No matching papers found; CSV file not written");
        }
    }

    if format.includes_bibtex() {
        let path = config.bibtex_path();
        if write_bibtex(records, &path)? {
            info!("Saved {} BibTeX entries to {}", records.len(), path.display());
        } else {
            warn!("No matching papers found; BibTeX file not written");
        }
    }

    Ok(())
}
