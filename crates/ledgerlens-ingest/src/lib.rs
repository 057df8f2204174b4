//! Workbook ingestion for ledgerlens.
//!
//! Turns a raw multi-sheet spreadsheet workbook into the canonical
//! [`Ledger`](ledgerlens_types::Ledger). Each sheet goes through header
//! hunting (trying offsets 0..=4 until a row resolves both required
//! columns), synonym-based column resolution, and row extraction; the
//! merger then concatenates the per-sheet batches in document order.
//!
//! Failures are contained at the smallest possible scope: a failed offset
//! attempt advances to the next offset, an unreadable sheet becomes a
//! diagnostic, and only a workbook where *no* sheet matched is terminal.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod merge;
mod observer;
mod sheet;
mod workbook;

pub use merge::{Ingestion, Merger};
pub use observer::{NullObserver, SheetObserver};
pub use sheet::{HEADER_SEARCH_DEPTH, SheetBatch, ingest_sheet};
pub use workbook::ingest_workbook;
