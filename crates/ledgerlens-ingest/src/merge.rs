//! Merging per-sheet batches into one ledger.

use std::collections::BTreeSet;

use ledgerlens_schema::normalize_code;
use ledgerlens_types::{Ledger, LedgerError, Result, SheetDiagnostic, TradeRecord};

use crate::sheet::SheetBatch;

/// Result of a complete ingestion pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    /// The merged canonical dataset.
    pub ledger: Ledger,
    /// One diagnostic per sheet, in document order.
    pub diagnostics: Vec<SheetDiagnostic>,
}

/// Accumulates per-sheet batches and diagnostics during an ingestion pass.
///
/// The merger is the only state that crosses sheet boundaries. Sheets are
/// absorbed strictly in document order, and [`Merger::finish`] seals the
/// dataset: zero matched sheets is a first-class failure carrying the full
/// diagnostic list, never a silently empty ledger.
#[derive(Debug, Default)]
pub struct Merger {
    batches: Vec<SheetBatch>,
    diagnostics: Vec<SheetDiagnostic>,
}

impl Merger {
    /// Creates an empty merger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            batches: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Absorbs the outcome of one sheet.
    pub fn absorb(&mut self, batch: Option<SheetBatch>, diagnostic: SheetDiagnostic) {
        if let Some(batch) = batch {
            self.batches.push(batch);
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns the diagnostics collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[SheetDiagnostic] {
        &self.diagnostics
    }

    /// Seals the ingestion pass.
    ///
    /// Concatenates all matched batches preserving sheet-then-row order and
    /// re-applies code normalization across the whole dataset (a no-op for
    /// well-formed batches, since normalization is idempotent).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoMatchingSheets`] with the full diagnostic
    /// list when no sheet produced records.
    pub fn finish(self) -> Result<Ingestion> {
        if self.batches.is_empty() {
            return Err(LedgerError::NoMatchingSheets(self.diagnostics));
        }

        let mut columns = BTreeSet::new();
        let mut records: Vec<TradeRecord> = Vec::new();
        for batch in self.batches {
            columns.extend(batch.columns.iter().copied());
            records.extend(batch.records);
        }
        for record in &mut records {
            record.code = normalize_code(&record.code);
        }

        let sheet_count = self.diagnostics.len();
        Ok(Ingestion {
            ledger: Ledger::new(records, columns, sheet_count),
            diagnostics: self.diagnostics,
        })
    }
}
