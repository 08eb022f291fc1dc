//! arXiv API client and its error taxonomy.

mod arxiv;

pub use arxiv::{normalize_entry, ArxivClient, QueryStats, ARXIV_API_URL};

/// Errors that can occur while fetching or parsing a result page.
///
/// A page-level error aborts pagination for the query it occurred in; it is
/// never fatal to the overall run.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// API error from the service (non-success status)
    #[error("API error: {0}")]
    Api(String),

    /// Parsing error (feed document or entry field)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}
