//! Display utilities and output formatting for the ledgerlens CLI.

use clap::ValueEnum;
use ledgerlens_lib::prelude::*;
use ledgerlens_lib::{AnalysisOutcome, ReportError};

/// Report format selected on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Xlsx,
    Csv,
    Json,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xlsx => Self::Xlsx,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Prints the summary metrics and table sizes for a completed analysis.
pub(crate) fn print_outcome(outcome: &AnalysisOutcome) {
    println!("Analysis for security code {}", outcome.analysis.target_code);
    println!("{}", "-".repeat(50));
    for (key, value) in &outcome.report.summary {
        println!("{key:<24} {value}");
    }

    println!();
    println!(
        "same-day table: {} rows ({})",
        outcome.analysis.same_day.rows.len(),
        outcome.analysis.same_day.note
    );
    println!(
        "price trend:    {} rows ({})",
        outcome.analysis.trend.rows.len(),
        outcome.analysis.trend.note
    );
}

/// Prints the per-sheet diagnostic report.
///
/// Used when ingestion fails completely, so the caller sees exactly what
/// each sheet exposed instead of a bare "no data" message.
pub(crate) fn print_diagnostics(diagnostics: &[SheetDiagnostic]) {
    eprintln!("Diagnostic report ({} sheets):", diagnostics.len());
    for diagnostic in diagnostics {
        eprintln!("  {diagnostic}");
    }
}

/// Maps a report-export error for CLI display.
pub(crate) fn export_failed(error: ReportError) -> anyhow::Error {
    anyhow::anyhow!("failed to write report: {error}")
}
