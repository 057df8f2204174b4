//! Forensic trading statistics over a canonical ledger.
//!
//! Given the merged [`Ledger`](ledgerlens_types::Ledger) and a normalized
//! target security code, the [`Analyzer`] computes:
//!
//! - The target's share of total account volume
//! - A mixed/single classification of every day the target traded
//! - A same-day ratio table (target volume vs. account volume per date)
//! - A price-trend series with a two-tier fallback computation
//!
//! Everything downstream of a merged ledger degrades gracefully: a missing
//! date column or an unusable price trend produces a placeholder with an
//! explanatory note, never an error.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyzer;
mod trend;

pub use analyzer::{Analysis, Analyzer, DayBreakdown, DayClass, SameDayAnalysis, SameDayRow};
pub use trend::{PriceTrend, TrendBasis, TrendRow};
