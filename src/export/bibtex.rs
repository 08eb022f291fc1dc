//! BibTeX export with LaTeX field escaping.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::models::Record;

/// LaTeX-special tokens and their escaped replacements.
const LATEX_SPECIALS: [(&str, &str); 11] = [
    ("\\", "\\\\textbackslash{}"),
    ("{", "\\{"),
    ("}", "\\}"),
    ("$", "\\$"),
    ("&", "\\&"),
    ("%", "\\%"),
    ("#", "\\#"),
    ("_", "\\_"),
    ("^", "\\^{}"),
    ("~", "\\~{}"),
    ("\"", "''"),
];

/// One alternation over every special token, built once.
fn specials_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = LATEX_SPECIALS
            .iter()
            .map(|(token, _)| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&pattern).expect("escape alternation is a valid regex")
    })
}

/// Escape LaTeX-special characters in a BibTeX field value.
///
/// All tokens are matched by a single combined pattern in one pass over the
/// input, so replacement output is never re-scanned and cannot be
/// double-escaped.
pub fn latex_escape(text: &str) -> String {
    specials_regex()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            LATEX_SPECIALS
                .iter()
                .find(|(key, _)| *key == token)
                .map(|(_, replacement)| (*replacement).to_string())
                .unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}

/// Render one record as an `@article` entry.
fn format_entry(record: &Record) -> String {
    let url = record
        .pdf_url
        .strip_suffix(".pdf")
        .unwrap_or(&record.pdf_url);

    format!(
        "@article{{{},\n  title={{ {} }},\n  author={{ {} }},\n  journal={{ arXiv preprint arXiv:{} }},\n  year={{ {} }},\n  url={{ {} }},\n  abstract={{ {} }}\n}}",
        record.citation_key(),
        latex_escape(&record.title),
        latex_escape(&record.authors_bibtex()),
        record.id,
        record.year(),
        url,
        latex_escape(&record.abstract_text),
    )
}

/// Write the record set as a BibTeX file at `path`, entries separated by a
/// blank line.
///
/// Returns `false` without touching the filesystem when `records` is empty.
pub fn write_bibtex(records: &[Record], path: &Path) -> Result<bool> {
    if records.is_empty() {
        return Ok(false);
    }

    let entries: Vec<String> = records.iter().map(format_entry).collect();
    std::fs::write(path, entries.join("\n\n"))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> Record {
        Record {
            id: "2301.12345v1".to_string(),
            title: "Costs & Benefits".to_string(),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            published: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            abstract_text: "We spend $5 on 100% of cases.".to_string(),
            url: "http://arxiv.org/abs/2301.12345v1".to_string(),
            pdf_url: "http://arxiv.org/pdf/2301.12345v1".to_string(),
        }
    }

    #[test]
    fn test_latex_escape_single_pass() {
        assert_eq!(latex_escape("100% & $5"), "100\\% \\& \\$5");
    }

    #[test]
    fn test_latex_escape_all_tokens() {
        assert_eq!(latex_escape("a_b"), "a\\_b");
        assert_eq!(latex_escape("{x}"), "\\{x\\}");
        assert_eq!(latex_escape("a^b"), "a\\^{}b");
        assert_eq!(latex_escape("a~b"), "a\\~{}b");
        assert_eq!(latex_escape("#1"), "\\#1");
        assert_eq!(latex_escape("say \"hi\""), "say ''hi''");
        assert_eq!(latex_escape("a\\b"), "a\\\\textbackslash{}b");
    }

    #[test]
    fn test_latex_escape_does_not_double_escape() {
        // The '\' introduced by escaping '%' must not itself be re-matched
        let escaped = latex_escape("50%");
        assert_eq!(escaped, "50\\%");
        assert!(!escaped.contains("textbackslash"));
    }

    #[test]
    fn test_entry_layout() {
        let entry = format_entry(&record());
        let expected = "@article{230112345v1,\n  \
            title={ Costs \\& Benefits },\n  \
            author={ Ada Lovelace and Alan Turing },\n  \
            journal={ arXiv preprint arXiv:2301.12345v1 },\n  \
            year={ 2023 },\n  \
            url={ http://arxiv.org/pdf/2301.12345v1 },\n  \
            abstract={ We spend \\$5 on 100\\% of cases. }\n}";
        assert_eq!(entry, expected);
    }

    #[test]
    fn test_trailing_pdf_suffix_stripped_from_url() {
        let mut r = record();
        r.pdf_url = "http://arxiv.org/pdf/2301.12345v1.pdf".to_string();
        let entry = format_entry(&r);
        assert!(entry.contains("url={ http://arxiv.org/pdf/2301.12345v1 }"));
    }

    #[test]
    fn test_empty_set_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bib");

        assert!(!write_bibtex(&[], &path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_entries_joined_by_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bib");

        let mut second = record();
        second.id = "2302.00001v2".to_string();

        assert!(write_bibtex(&[record(), second], &path).unwrap());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("@article{").count(), 2);
        assert!(contents.contains("}\n\n@article{230200001v2,"));
    }
}
