//! Tabular (CSV) export.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use crate::models::Record;

/// Column headers, in output order.
const HEADERS: [&str; 6] = [
    "arXiv ID",
    "Title",
    "Authors",
    "Published",
    "Abstract",
    "PDF Link",
];

/// Write the record set as a CSV file at `path`.
///
/// Returns `false` without touching the filesystem when `records` is empty.
pub fn write_csv(records: &[Record], path: &Path) -> Result<bool> {
    if records.is_empty() {
        return Ok(false);
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(HEADERS)?;
    for record in records {
        writer.write_record([
            record.id.as_str(),
            record.title.as_str(),
            record.authors_joined().as_str(),
            record.published_iso().as_str(),
            record.abstract_text.as_str(),
            record.pdf_url.as_str(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            title: "A Paper, With a Comma".to_string(),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            published: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            abstract_text: "An abstract.".to_string(),
            url: format!("http://arxiv.org/abs/{}", id),
            pdf_url: format!("http://arxiv.org/pdf/{}", id),
        }
    }

    #[test]
    fn test_empty_set_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        assert!(!write_csv(&[], &path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        assert!(write_csv(&[record("2301.12345v1")], &path).unwrap());

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("arXiv ID,Title,Authors,Published,Abstract,PDF Link")
        );
        // Fields containing commas are quoted
        assert_eq!(
            lines.next(),
            Some(
                "2301.12345v1,\"A Paper, With a Comma\",\"Ada Lovelace, Alan Turing\",2023-01-15,An abstract.,http://arxiv.org/pdf/2301.12345v1"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents").unwrap();

        assert!(write_csv(&[record("2301.12345v1")], &path).unwrap());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("arXiv ID,"));
    }
}
