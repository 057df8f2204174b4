//! Export format selection.

use std::path::Path;

use thiserror::Error;

use crate::Report;

/// Export format for the analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Multi-sheet workbook, one sheet per table.
    #[default]
    Xlsx,
    /// Directory of CSV files, one per table.
    Csv,
    /// Single JSON document.
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format.
    ///
    /// The CSV format writes a directory; the extension applies to the
    /// files inside it.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Xlsx, Self::Csv, Self::Json]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while exporting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Unknown export format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Workbook writing error.
    #[error("Workbook error: {0}")]
    Xlsx(String),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::Xlsx(error.to_string())
    }
}

/// Writes the report to `path` in the given format.
///
/// For [`ReportFormat::Csv`] the path names a directory that will be
/// created if needed; for the other formats it names the output file.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report(report: &Report, format: ReportFormat, path: &Path) -> Result<(), ReportError> {
    match format {
        ReportFormat::Xlsx => crate::write_xlsx(report, path),
        ReportFormat::Csv => crate::write_csv(report, path),
        ReportFormat::Json => {
            let file = std::fs::File::create(path)?;
            crate::write_json(report, std::io::BufWriter::new(file))
        }
    }
}
