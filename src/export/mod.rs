//! Exporters for the deduplicated record set.
//!
//! Both variants consume the same input and skip file creation entirely when
//! the record set is empty; a successful write always overwrites any
//! existing file at the target path.

mod bibtex;
mod csv;

pub use bibtex::{latex_escape, write_bibtex};
pub use csv::write_csv;

/// Output format selection for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV table only
    Csv,
    /// BibTeX bibliography only
    Bibtex,
    /// Both outputs
    All,
}

impl ExportFormat {
    /// Whether the CSV export runs for this selection
    pub fn includes_csv(self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::All)
    }

    /// Whether the BibTeX export runs for this selection
    pub fn includes_bibtex(self) -> bool {
        matches!(self, ExportFormat::Bibtex | ExportFormat::All)
    }
}
