//! Workbook-level ingestion driver.

use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use ledgerlens_types::{LedgerError, Result, SheetDiagnostic, SheetOutcome};

use crate::merge::{Ingestion, Merger};
use crate::observer::SheetObserver;
use crate::sheet::ingest_sheet;

/// Ingests every sheet of the workbook at `path` into one ledger.
///
/// Sheets are processed synchronously in document order. The observer is
/// notified once per sheet; pass [`crate::NullObserver`] for headless use.
///
/// # Errors
///
/// Returns [`LedgerError::UnreadableWorkbook`] when the file cannot be
/// opened as a spreadsheet, and [`LedgerError::NoMatchingSheets`] when no
/// sheet resolved the required columns. An individual sheet that fails to
/// read only produces an `Unreadable` diagnostic.
pub fn ingest_workbook(path: &Path, observer: &mut dyn SheetObserver) -> Result<Ingestion> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LedgerError::UnreadableWorkbook(e.to_string()))?;

    let names = workbook.sheet_names().to_vec();
    let total = names.len();
    let mut merger = Merger::new();

    for (index, name) in names.iter().enumerate() {
        let (batch, diagnostic) = match workbook.worksheet_range(name) {
            Ok(range) => ingest_sheet(name, &range),
            Err(e) => (
                None,
                SheetDiagnostic::new(
                    name.clone(),
                    SheetOutcome::Unreadable {
                        error: e.to_string(),
                    },
                ),
            ),
        };
        observer.on_sheet(index, total, &diagnostic);
        merger.absorb(batch, diagnostic);
    }

    merger.finish()
}
