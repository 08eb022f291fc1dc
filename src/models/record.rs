//! Record model representing one matched arXiv publication.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized, filtered publication record.
///
/// Records are created by the entry normalizer and never mutated afterwards;
/// the exporters only derive re-encoded values (escaping, joining) from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// arXiv identifier (final path segment of the abstract URL).
    /// Globally unique after deduplication; the dedup key.
    pub id: String,

    /// Paper title, single line (embedded newlines normalized away)
    pub title: String,

    /// Author names in source order
    pub authors: Vec<String>,

    /// Publication date
    pub published: NaiveDate,

    /// Abstract text, single line
    pub abstract_text: String,

    /// Abstract landing-page URL
    pub url: String,

    /// Direct PDF URL (derived from the landing-page URL)
    pub pdf_url: String,
}

impl Record {
    /// Publication date in ISO form (`YYYY-MM-DD`)
    pub fn published_iso(&self) -> String {
        self.published.format("%Y-%m-%d").to_string()
    }

    /// Publication year (first four characters of the ISO date)
    pub fn year(&self) -> String {
        self.published.format("%Y").to_string()
    }

    /// Authors joined with `", "`, as rendered in the CSV export
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }

    /// Authors joined with `" and "`, as rendered in BibTeX author fields
    pub fn authors_bibtex(&self) -> String {
        self.authors.join(" and ")
    }

    /// Citation key: the identifier with `'.'` and `'/'` removed
    pub fn citation_key(&self) -> String {
        self.id.chars().filter(|c| *c != '.' && *c != '/').collect()
    }
}
