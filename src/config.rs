//! Run configuration.
//!
//! All parameters are fixed constants for a given run; the defaults below
//! reproduce the reference survey (foundation models for wearable health
//! signals, 2020 onwards). The CLI may override the pagination knobs and the
//! output directory, but the vocabularies are compiled in.

use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

/// Version token embedded in the BibTeX output filename
pub const OUTPUT_VERSION: &str = "v2";

/// Fixed name of the CSV output file
pub const CSV_FILENAME: &str = "arxiv_combined_deduplicated_results.csv";

/// Model-architecture vocabulary
const MODEL_TERMS: &[&str] = &[
    "foundation model",
    "foundation models",
    "transformer",
    "self-supervised",
];

/// Signal-source vocabulary
const SIGNAL_TERMS: &[&str] = &["wearable", "biosignal"];

/// Application-domain vocabulary
const HEALTH_TERMS: &[&str] = &["health", "clinical", "human activity recognition"];

/// Configuration for one harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Model-architecture terms (outer loop of the query product)
    pub model_terms: Vec<String>,

    /// Signal-source terms (middle loop)
    pub signal_terms: Vec<String>,

    /// Application-domain terms (inner loop)
    pub health_terms: Vec<String>,

    /// Minimum publication date (inclusive) for a record to be retained
    pub cutoff_date: NaiveDate,

    /// Number of entries requested per API page
    pub page_size: usize,

    /// Politeness delay between successive page fetches within a query
    pub page_delay: Duration,

    /// Version token for the BibTeX output filename
    pub version: String,

    /// Directory output files are written into
    pub output_dir: PathBuf,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            model_terms: MODEL_TERMS.iter().map(|s| s.to_string()).collect(),
            signal_terms: SIGNAL_TERMS.iter().map(|s| s.to_string()).collect(),
            health_terms: HEALTH_TERMS.iter().map(|s| s.to_string()).collect(),
            cutoff_date: default_cutoff_date(),
            page_size: 200,
            page_delay: Duration::from_secs(1),
            version: OUTPUT_VERSION.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl HarvestConfig {
    /// Path of the CSV output file for this run
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(CSV_FILENAME)
    }

    /// Path of the BibTeX output file for this run
    pub fn bibtex_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("arxiv_foundation_model_results_{}.bib", self.version))
    }
}

fn default_cutoff_date() -> NaiveDate {
    // 2020-01-01 is always a valid calendar date
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarvestConfig::default();
        assert_eq!(config.model_terms.len(), 4);
        assert_eq!(config.signal_terms.len(), 2);
        assert_eq!(config.health_terms.len(), 3);
        assert_eq!(config.page_size, 200);
        assert_eq!(config.page_delay, Duration::from_secs(1));
        assert_eq!(config.cutoff_date.to_string(), "2020-01-01");
    }

    #[test]
    fn test_output_paths() {
        let config = HarvestConfig::default();
        assert_eq!(
            config.csv_path().file_name().and_then(|n| n.to_str()),
            Some("arxiv_combined_deduplicated_results.csv")
        );
        assert_eq!(
            config.bibtex_path().file_name().and_then(|n| n.to_str()),
            Some("arxiv_foundation_model_results_v2.bib")
        );
    }
}
