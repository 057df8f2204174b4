//! Per-sheet ingestion diagnostics.

use serde::{Deserialize, Serialize};

/// Outcome of ingesting one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetOutcome {
    /// Required columns resolved at the given header row.
    Matched {
        /// Zero-based row index where the real header was found.
        header_row: usize,
        /// Number of canonical records extracted.
        rows: usize,
        /// Observed column names that hit an already-bound canonical column
        /// and were dropped.
        duplicate_columns: Vec<String>,
    },
    /// No header offset exposed both required columns.
    Unmatched {
        /// Column names visible at the first row, best effort.
        observed: Vec<String>,
    },
    /// The sheet could not be read at all.
    Unreadable {
        /// Text of the underlying read error.
        error: String,
    },
}

/// Diagnostic for one sheet of the workbook.
///
/// Exactly one diagnostic is produced per sheet, whether or not ingestion
/// succeeded, so a total failure can be explained column by column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDiagnostic {
    /// Sheet name as it appears in the workbook.
    pub sheet: String,
    /// What happened when the sheet was ingested.
    pub outcome: SheetOutcome,
}

impl SheetDiagnostic {
    /// Creates a diagnostic for a sheet.
    #[must_use]
    pub const fn new(sheet: String, outcome: SheetOutcome) -> Self {
        Self { sheet, outcome }
    }

    /// Returns whether the sheet produced records.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.outcome, SheetOutcome::Matched { .. })
    }
}

impl std::fmt::Display for SheetDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            SheetOutcome::Matched {
                header_row,
                rows,
                duplicate_columns,
            } => {
                write!(
                    f,
                    "sheet '{}': matched at header row {header_row} ({rows} records)",
                    self.sheet
                )?;
                if !duplicate_columns.is_empty() {
                    write!(
                        f,
                        "; duplicate columns dropped: {}",
                        duplicate_columns.join(", ")
                    )?;
                }
                Ok(())
            }
            SheetOutcome::Unmatched { observed } => {
                if observed.is_empty() {
                    write!(
                        f,
                        "sheet '{}': required columns not found (no column names visible)",
                        self.sheet
                    )
                } else {
                    write!(
                        f,
                        "sheet '{}': required columns not found; observed columns: {}",
                        self.sheet,
                        observed.join(", ")
                    )
                }
            }
            SheetOutcome::Unreadable { error } => {
                write!(f, "sheet '{}': unreadable ({error})", self.sheet)
            }
        }
    }
}
