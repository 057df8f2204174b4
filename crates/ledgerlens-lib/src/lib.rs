//! Trade-ledger forensics for messy brokerage workbooks.
//!
//! This is a facade crate that re-exports functionality from the
//! ledgerlens workspace crates and provides the one-call pipeline.
//!
//! # Quick Start
//!
//! ```ignore
//! use ledgerlens_lib::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let outcome = analyze_workbook(Path::new("ledger.xlsx"), "2776", &mut NullObserver)?;
//!     println!("volume share: {:.2}%", outcome.analysis.volume_share_pct);
//!     write_report(&outcome.report, ReportFormat::Xlsx, Path::new("report.xlsx"))?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::path::Path;

// Re-export core types
pub use ledgerlens_types::*;

// Re-export schema resolution
pub use ledgerlens_schema::{SchemaMap, canonical_of, normalize_code, resolve_columns, synonym_table};

// Re-export ingestion
pub use ledgerlens_ingest::{
    HEADER_SEARCH_DEPTH, Ingestion, Merger, NullObserver, SheetBatch, SheetObserver, ingest_sheet,
    ingest_workbook,
};

// Re-export analytics
pub use ledgerlens_analytics::{
    Analysis, Analyzer, DayBreakdown, DayClass, PriceTrend, SameDayAnalysis, SameDayRow,
    TrendBasis, TrendRow,
};

// Re-export report assembly and writers
pub use ledgerlens_report::{Report, ReportError, ReportFormat, write_report};

/// Everything the full pipeline produces for one workbook and target code.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// The merged canonical dataset.
    pub ledger: Ledger,
    /// One diagnostic per sheet, in document order.
    pub diagnostics: Vec<SheetDiagnostic>,
    /// Computed statistics for the target code.
    pub analysis: Analysis,
    /// Export-ready report bundle.
    pub report: Report,
}

/// Runs the full pipeline: ingest, merge, analyze, assemble.
///
/// The target code is normalized before any ingestion work; comparisons
/// against ledger records are always post-normalization on both sides.
///
/// # Errors
///
/// - [`LedgerError::InvalidTargetCode`] when the target normalizes to empty
/// - [`LedgerError::UnreadableWorkbook`] when the file cannot be opened
/// - [`LedgerError::NoMatchingSheets`] when no sheet matched, carrying the
///   full diagnostic list
/// - [`LedgerError::EmptyTarget`] when the target matched zero records
pub fn analyze_workbook(
    path: &Path,
    target_code: &str,
    observer: &mut dyn SheetObserver,
) -> Result<AnalysisOutcome> {
    let target = normalize_code(target_code);
    if target.is_empty() {
        return Err(LedgerError::InvalidTargetCode);
    }

    let Ingestion {
        ledger,
        diagnostics,
    } = ingest_workbook(path, observer)?;

    let analysis = Analyzer::new(&ledger, &target).run()?;
    let report = Report::assemble(&ledger, &analysis);

    Ok(AnalysisOutcome {
        ledger,
        diagnostics,
        analysis,
        report,
    })
}

/// Prelude module for convenient imports.
///
/// ```
/// use ledgerlens_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ledgerlens_types::{
        Column, Direction, Ledger, LedgerError, Result, SheetDiagnostic, SheetOutcome, TradeRecord,
    };

    pub use ledgerlens_schema::{normalize_code, resolve_columns};

    pub use ledgerlens_ingest::{NullObserver, SheetObserver, ingest_workbook};

    pub use ledgerlens_analytics::{Analysis, Analyzer, PriceTrend, SameDayAnalysis};

    pub use ledgerlens_report::{Report, ReportFormat, write_report};

    pub use crate::{AnalysisOutcome, analyze_workbook};
}
