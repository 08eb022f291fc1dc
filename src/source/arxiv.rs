//! arXiv API client: paginated fetching and entry normalization.

use chrono::NaiveDate;
use feed_rs::parser;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::HarvestConfig;
use crate::models::Record;
use crate::source::SourceError;

/// Base URL for the arXiv search API
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Counters for one query's pagination.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryStats {
    /// Pages actually fetched (offset advanced by `page_size` for each)
    pub pages: usize,
    /// Records that passed the date filter and were accumulated
    pub kept: usize,
    /// Whether pagination was aborted by a transport/parse failure
    pub failed: bool,
}

/// Client for the arXiv search API.
///
/// Fetches result pages for one query at a time, walking offsets until the
/// feed is exhausted, a page yields no qualifying entries, or a page request
/// fails. Requests are sequential with a fixed politeness delay between
/// successful pages; there is no retry and no backoff.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http: reqwest::Client,
    base_url: String,
    page_size: usize,
    page_delay: Duration,
}

impl ArxivClient {
    /// Create a client for the public arXiv API.
    pub fn new(config: &HarvestConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: ARXIV_API_URL.to_string(),
            page_size: config.page_size,
            page_delay: config.page_delay,
        })
    }

    /// Point the client at a different API endpoint (for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of one result page for `query` at offset `start`.
    fn page_url(&self, query: &str, start: usize) -> String {
        format!(
            "{}?search_query={}&start={}&max_results={}&sortBy=lastUpdatedDate&sortOrder=descending",
            self.base_url,
            urlencoding::encode(query),
            start,
            self.page_size
        )
    }

    /// Fetch and parse one result page, returning its raw feed entries.
    async fn fetch_page(
        &self,
        query: &str,
        start: usize,
    ) -> Result<Vec<feed_rs::model::Entry>, SourceError> {
        let url = self.page_url(query, start);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch arXiv results: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "arXiv API returned status: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        let feed = parser::parse(bytes.as_ref())
            .map_err(|e| SourceError::Parse(format!("Failed to parse Atom feed: {}", e)))?;

        Ok(feed.entries)
    }

    /// Walk all result pages for one query, appending qualifying records to
    /// `records`.
    ///
    /// Termination conditions, checked per page in order:
    /// 1. transport/parse failure: pagination aborts, logged, not fatal;
    /// 2. zero raw entries: the feed is exhausted;
    /// 3. entries present but none pass the date filter: no new results.
    ///
    /// The offset advances by exactly `page_size` for every fetched page,
    /// regardless of how many entries survived the filter. Duplicates across
    /// overlapping queries are kept here; deduplication is global and
    /// happens after all queries complete.
    pub async fn harvest_query(
        &self,
        query: &str,
        cutoff: NaiveDate,
        records: &mut Vec<Record>,
    ) -> QueryStats {
        let mut stats = QueryStats::default();
        let mut start = 0;

        info!("Querying: {}", query);

        loop {
            info!("Fetching results {} to {}", start, start + self.page_size);

            let entries = match self.fetch_page(query, start).await {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("Request failed for '{}' at offset {}: {}", query, start, err);
                    stats.failed = true;
                    return stats;
                }
            };

            stats.pages += 1;

            if entries.is_empty() {
                debug!("No more entries for '{}'", query);
                return stats;
            }

            let mut kept_this_page = 0;
            for entry in &entries {
                match normalize_entry(entry, cutoff) {
                    Ok(Some(record)) => {
                        records.push(record);
                        kept_this_page += 1;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        warn!("Skipping rest of query '{}': {}", query, err);
                        stats.failed = true;
                        return stats;
                    }
                }
            }
            stats.kept += kept_this_page;

            if kept_this_page == 0 {
                debug!("No new results for '{}' past the cutoff", query);
                return stats;
            }

            start += self.page_size;
            tokio::time::sleep(self.page_delay).await;
        }
    }
}

/// Normalize one raw feed entry into a [`Record`], or reject it.
///
/// Entries published before `cutoff` are skipped (`Ok(None)`). An entry
/// without a parseable published date is a parse error, which aborts the
/// surrounding query's pagination.
pub fn normalize_entry(
    entry: &feed_rs::model::Entry,
    cutoff: NaiveDate,
) -> Result<Option<Record>, SourceError> {
    let published = entry
        .published
        .ok_or_else(|| SourceError::Parse(format!("Entry {} has no published date", entry.id)))?
        .date_naive();

    if published < cutoff {
        return Ok(None);
    }

    // The arXiv ID is the final path segment of the abstract URL
    let id = entry
        .id
        .rsplit('/')
        .next()
        .unwrap_or(entry.id.as_str())
        .to_string();

    let title = entry
        .title
        .as_ref()
        .map(|t| single_line(&t.content))
        .unwrap_or_default();

    let abstract_text = entry
        .summary
        .as_ref()
        .map(|s| single_line(&s.content))
        .unwrap_or_default();

    let authors = entry.authors.iter().map(|a| a.name.clone()).collect();

    // First occurrence only; "abs" elsewhere in the URL path is a latent
    // upstream quirk and is deliberately not handled here
    let pdf_url = entry.id.replacen("abs", "pdf", 1);

    Ok(Some(Record {
        id,
        title,
        authors,
        published,
        abstract_text,
        url: entry.id.clone(),
        pdf_url,
    }))
}

/// Strip surrounding whitespace and collapse embedded newlines to spaces.
fn single_line(text: &str) -> String {
    text.trim().replace('\n', " ")
}
