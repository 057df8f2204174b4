//! The merged canonical dataset.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Column, TradeRecord};

/// The merged, ordered dataset of canonical trade records.
///
/// Record order is sheet processing order, then row order within each sheet.
/// The dataset is not sorted by date and is immutable once the merge
/// completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<TradeRecord>,
    columns: BTreeSet<Column>,
    sheet_count: usize,
}

impl Ledger {
    /// Creates a ledger from merged records.
    ///
    /// `columns` is the union of canonical columns that resolved on any
    /// matched sheet; `sheet_count` counts every sheet seen, matched or not.
    #[must_use]
    pub const fn new(
        records: Vec<TradeRecord>,
        columns: BTreeSet<Column>,
        sheet_count: usize,
    ) -> Self {
        Self {
            records,
            columns,
            sheet_count,
        }
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of sheets the workbook contained.
    #[must_use]
    pub const fn sheet_count(&self) -> usize {
        self.sheet_count
    }

    /// Returns whether the given canonical column resolved on any sheet.
    #[must_use]
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// Returns the records matching the given normalized security code.
    pub fn records_for<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a TradeRecord> {
        self.records.iter().filter(move |r| r.code == code)
    }

    /// Returns the total absolute volume across all records.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.records.iter().map(TradeRecord::volume).sum()
    }
}
