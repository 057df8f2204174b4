//! Volume share, day classification, and same-day aggregation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use ledgerlens_types::{Column, Ledger, LedgerError, Result, TradeRecord};
use serde::{Deserialize, Serialize};

use crate::trend::{PriceTrend, price_trend};

/// Classification of one day the target traded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClass {
    /// Trade date.
    pub date: NaiveDate,
    /// True when at least one other security also traded that date.
    pub mixed: bool,
}

/// Mixed/single breakdown of the target's trading days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// Per-day classes, ascending by date.
    pub days: Vec<DayClass>,
    /// Number of days where other securities also traded.
    pub mixed_days: usize,
    /// Number of days where only the target traded.
    pub single_days: usize,
}

/// One row of the same-day ratio table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SameDayRow {
    /// Trade date.
    pub date: NaiveDate,
    /// Absolute volume across all codes that date.
    pub total_volume: f64,
    /// Absolute volume for the target code that date.
    pub target_volume: f64,
    /// Target share of the date's volume, percent, rounded to 2 decimals.
    pub target_share_pct: f64,
}

/// Same-day ratio table with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SameDayAnalysis {
    /// Rows, ascending by date; empty when the analysis was skipped.
    pub rows: Vec<SameDayRow>,
    /// Human-readable note on how (or why not) the table was computed.
    pub note: String,
}

/// Complete analytics bundle for one target code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Normalized target security code.
    pub target_code: String,
    /// Records in the whole ledger.
    pub total_records: usize,
    /// Records matching the target code.
    pub target_records: usize,
    /// Total absolute volume across all records.
    pub total_volume: f64,
    /// Absolute volume across target records.
    pub target_volume: f64,
    /// Target share of total volume, percent.
    pub volume_share_pct: f64,
    /// Mixed/single day breakdown.
    pub days: DayBreakdown,
    /// Same-day ratio table.
    pub same_day: SameDayAnalysis,
    /// Price-trend series.
    pub trend: PriceTrend,
}

/// Computes forensic statistics for one target code over a merged ledger.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    ledger: &'a Ledger,
    target: &'a str,
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer for the given ledger and normalized target code.
    #[must_use]
    pub const fn new(ledger: &'a Ledger, target: &'a str) -> Self {
        Self { ledger, target }
    }

    /// Runs the full analysis.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::EmptyTarget`] when the target code matches
    /// zero records; there is nothing to analyze in that case.
    pub fn run(&self) -> Result<Analysis> {
        let target_records: Vec<&TradeRecord> = self.ledger.records_for(self.target).collect();
        if target_records.is_empty() {
            return Err(LedgerError::EmptyTarget {
                code: self.target.to_string(),
            });
        }

        let total_volume = self.ledger.total_volume();
        let target_volume: f64 = target_records.iter().map(|r| r.volume()).sum();

        Ok(Analysis {
            target_code: self.target.to_string(),
            total_records: self.ledger.len(),
            target_records: target_records.len(),
            total_volume,
            target_volume,
            volume_share_pct: self.volume_share(),
            days: self.classify_days(),
            same_day: self.same_day_table(),
            trend: self.price_trend(),
        })
    }

    /// Returns the target's share of total absolute volume, in percent.
    ///
    /// Defined as 0 when the ledger's total volume is 0.
    #[must_use]
    pub fn volume_share(&self) -> f64 {
        let total = self.ledger.total_volume();
        if total == 0.0 {
            return 0.0;
        }
        let target: f64 = self
            .ledger
            .records_for(self.target)
            .map(TradeRecord::volume)
            .sum();
        target / total * 100.0
    }

    /// Classifies every date the target traded as mixed or single.
    ///
    /// A day is mixed when more than one distinct security code traded that
    /// date anywhere in the ledger. Dates on which the target did not trade
    /// are not classified, and dateless records cannot contribute.
    #[must_use]
    pub fn classify_days(&self) -> DayBreakdown {
        let codes_by_date = self.codes_by_date();
        let mut days = Vec::new();
        let mut mixed_days = 0;
        let mut single_days = 0;

        for date in self.target_dates() {
            let mixed = codes_by_date.get(&date).is_some_and(|codes| codes.len() > 1);
            if mixed {
                mixed_days += 1;
            } else {
                single_days += 1;
            }
            days.push(DayClass { date, mixed });
        }

        DayBreakdown {
            days,
            mixed_days,
            single_days,
        }
    }

    /// Builds the same-day ratio table.
    ///
    /// Restricted to dates the target traded, ascending. When no date
    /// column resolved anywhere, the table is skipped with an explanatory
    /// note instead of failing.
    #[must_use]
    pub fn same_day_table(&self) -> SameDayAnalysis {
        if !self.ledger.has_column(Column::Date) {
            return SameDayAnalysis {
                rows: Vec::new(),
                note: "no trade-date column resolved; same-day analysis skipped".to_string(),
            };
        }

        let target_dates = self.target_dates();
        if target_dates.is_empty() {
            return SameDayAnalysis {
                rows: Vec::new(),
                note: "no dated trades for the target; same-day analysis skipped".to_string(),
            };
        }

        let mut rows = Vec::with_capacity(target_dates.len());
        for date in target_dates {
            let mut total_volume = 0.0;
            let mut target_volume = 0.0;
            for record in self.ledger.records() {
                if record.date != Some(date) {
                    continue;
                }
                let volume = record.volume();
                total_volume += volume;
                if record.code == self.target {
                    target_volume += volume;
                }
            }
            let target_share_pct = if total_volume == 0.0 {
                0.0
            } else {
                round2(target_volume / total_volume * 100.0)
            };
            rows.push(SameDayRow {
                date,
                total_volume,
                target_volume,
                target_share_pct,
            });
        }

        SameDayAnalysis {
            rows,
            note: "per-date share of account volume on dates the target traded".to_string(),
        }
    }

    /// Computes the price trend over the target's records.
    #[must_use]
    pub fn price_trend(&self) -> PriceTrend {
        let target_records: Vec<&TradeRecord> = self.ledger.records_for(self.target).collect();
        price_trend(&target_records, self.ledger.has_column(Column::Direction))
    }

    /// Distinct dates on which the target traded, ascending.
    fn target_dates(&self) -> BTreeSet<NaiveDate> {
        self.ledger
            .records_for(self.target)
            .filter_map(|r| r.date)
            .collect()
    }

    /// Distinct security codes traded per date, across the whole ledger.
    fn codes_by_date(&self) -> BTreeMap<NaiveDate, BTreeSet<&'a str>> {
        let mut map: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
        for record in self.ledger.records() {
            if let Some(date) = record.date {
                map.entry(date).or_default().insert(record.code.as_str());
            }
        }
        map
    }
}

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
