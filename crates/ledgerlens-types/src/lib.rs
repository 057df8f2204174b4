//! Core types for the ledgerlens trade-ledger analyzer.
//!
//! This crate provides the fundamental data structures used throughout
//! ledgerlens:
//!
//! - [`TradeRecord`] - A single canonical trade-ledger row
//! - [`Direction`] - Buy/sell side of a trade
//! - [`Column`] - The canonical column vocabulary all sheets resolve into
//! - [`Ledger`] - The merged, ordered dataset of canonical records
//! - [`SheetDiagnostic`] - Per-sheet ingestion outcome

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod column;
mod diagnostic;
mod error;
mod ledger;
mod record;

pub use column::Column;
pub use diagnostic::{SheetDiagnostic, SheetOutcome};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use record::{Direction, TradeRecord};
