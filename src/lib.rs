//! # arXiv Harvester
//!
//! A sequential fetch-filter-export pipeline for building a deduplicated
//! literature corpus from the arXiv search API.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`]: Run configuration (vocabularies, cutoff date, pagination)
//! - [`query`]: Cartesian-product query generation
//! - [`models`]: Core data structures (Record)
//! - [`source`]: arXiv API client (paginated fetch + entry normalization)
//! - [`dedup`]: First-wins deduplication by arXiv ID
//! - [`export`]: CSV and BibTeX exporters
//! - [`pipeline`]: End-to-end orchestration

pub mod config;
pub mod dedup;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod source;

// Re-export commonly used types
pub use config::HarvestConfig;
pub use models::Record;
pub use source::{ArxivClient, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
