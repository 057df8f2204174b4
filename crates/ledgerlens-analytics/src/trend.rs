//! Tiered price-trend computation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ledgerlens_types::TradeRecord;
use serde::{Deserialize, Serialize};

/// Which computation produced the trend series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendBasis {
    /// Volume-weighted: per-date sum(amount) / sum(|quantity|).
    AmountWeighted,
    /// Fallback: per-date arithmetic mean of unit price.
    MeanPrice,
}

/// One point of the price-trend series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    /// Trade date.
    pub date: NaiveDate,
    /// Average price for the date, per the basis used.
    pub avg_price: f64,
}

/// Price-trend series with provenance.
///
/// The note describes which computation path was taken and on which record
/// subset, so downstream consumers can display where the numbers came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrend {
    /// Per-date average prices, ascending by date.
    pub rows: Vec<TrendRow>,
    /// Computation used; `None` when neither tier yielded data.
    pub basis: Option<TrendBasis>,
    /// Human-readable provenance note.
    pub note: String,
}

/// Computes the price trend for the target's records.
///
/// When a direction column resolved and at least one record is buy-tagged,
/// the computation is restricted to buy-side records; otherwise the full
/// target set is used and the note says so. The volume-weighted tier is
/// preferred and the mean-price tier is the fallback; an empty series with
/// a note is a normal outcome, not an error.
pub(crate) fn price_trend(records: &[&TradeRecord], direction_resolved: bool) -> PriceTrend {
    let restrict_to_buys = direction_resolved && records.iter().any(|r| r.is_buy());
    let subset: Vec<&TradeRecord> = if restrict_to_buys {
        records.iter().copied().filter(|r| r.is_buy()).collect()
    } else {
        records.to_vec()
    };
    let subset_label = if restrict_to_buys {
        "buy-side target records"
    } else {
        "all target records"
    };

    let weighted = amount_weighted(&subset);
    if !weighted.is_empty() {
        return PriceTrend {
            rows: weighted,
            basis: Some(TrendBasis::AmountWeighted),
            note: format!("volume-weighted average price (amount / |quantity|) over {subset_label}"),
        };
    }

    let mean = mean_price(&subset);
    if !mean.is_empty() {
        return PriceTrend {
            rows: mean,
            basis: Some(TrendBasis::MeanPrice),
            note: format!("simple mean of trade price over {subset_label}; trade amount unavailable"),
        };
    }

    PriceTrend {
        rows: Vec::new(),
        basis: None,
        note: format!("no usable amount or price data over {subset_label}; price trend unavailable"),
    }
}

/// Per-date sum(amount) / sum(|quantity|) over records where both fields
/// are usable and the quantity magnitude is nonzero.
fn amount_weighted(records: &[&TradeRecord]) -> Vec<TrendRow> {
    let mut by_date: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for record in records {
        let (Some(date), Some(amount)) = (record.date, record.amount) else {
            continue;
        };
        let volume = record.volume();
        if volume == 0.0 {
            continue;
        }
        let entry = by_date.entry(date).or_insert((0.0, 0.0));
        entry.0 += amount;
        entry.1 += volume;
    }
    by_date
        .into_iter()
        .map(|(date, (amount, volume))| TrendRow {
            date,
            avg_price: amount / volume,
        })
        .collect()
}

/// Per-date arithmetic mean of unit price over records where the price
/// parsed.
fn mean_price(records: &[&TradeRecord]) -> Vec<TrendRow> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let (Some(date), Some(price)) = (record.date, record.price) else {
            continue;
        };
        let entry = by_date.entry(date).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }
    by_date
        .into_iter()
        .map(|(date, (sum, count))| TrendRow {
            date,
            avg_price: sum / count as f64,
        })
        .collect()
}
