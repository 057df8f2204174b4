//! Report assembly and export for ledgerlens.
//!
//! [`Report`] packages the analytics bundle into named result tables
//! (summary, target trades, same-day analysis, price trend) ready for
//! export; the writers render those tables as a multi-sheet workbook, a
//! directory of CSV files, or a single JSON document. Assembly is purely a
//! data-shaping step with no new computation.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod format;
mod json;
mod report;
mod xlsx;

pub use csv::write_csv;
pub use format::{ReportError, ReportFormat, write_report};
pub use json::write_json;
pub use report::Report;
pub use xlsx::write_xlsx;
