//! Export-ready report bundle.

use ledgerlens_analytics::{Analysis, PriceTrend, SameDayAnalysis};
use ledgerlens_types::{Ledger, TradeRecord};
use serde::{Deserialize, Serialize};

/// Export-ready bundle of summary scalars and derived tables.
///
/// Exported as four named tables; when written as a workbook, each table
/// becomes one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Flat key/value summary rows.
    pub summary: Vec<(String, String)>,
    /// All canonical records for the target code, in ledger order.
    pub target_trades: Vec<TradeRecord>,
    /// Same-day ratio table.
    pub same_day: SameDayAnalysis,
    /// Price-trend series.
    pub trend: PriceTrend,
}

impl Report {
    /// Sheet name for the summary table.
    pub const SHEET_SUMMARY: &'static str = "Summary";
    /// Sheet name for the target detail table.
    pub const SHEET_TARGET_TRADES: &'static str = "Target Trades";
    /// Sheet name for the same-day ratio table.
    pub const SHEET_SAME_DAY: &'static str = "Same-Day Analysis";
    /// Sheet name for the price-trend table.
    pub const SHEET_TREND: &'static str = "Price Trend";

    /// Assembles the report from the ledger and its analysis.
    #[must_use]
    pub fn assemble(ledger: &Ledger, analysis: &Analysis) -> Self {
        let mixed_to_single = if analysis.days.single_days == 0 {
            "n/a".to_string()
        } else {
            format!(
                "{:.2}",
                analysis.days.mixed_days as f64 / analysis.days.single_days as f64
            )
        };

        let summary = vec![
            ("target code".to_string(), analysis.target_code.clone()),
            (
                "sheets in workbook".to_string(),
                ledger.sheet_count().to_string(),
            ),
            (
                "total records".to_string(),
                analysis.total_records.to_string(),
            ),
            (
                "target records".to_string(),
                analysis.target_records.to_string(),
            ),
            (
                "total volume".to_string(),
                format!("{:.2}", analysis.total_volume),
            ),
            (
                "target volume".to_string(),
                format!("{:.2}", analysis.target_volume),
            ),
            (
                "volume share %".to_string(),
                format!("{:.2}", analysis.volume_share_pct),
            ),
            (
                "target trading dates".to_string(),
                analysis.days.days.len().to_string(),
            ),
            ("mixed days".to_string(), analysis.days.mixed_days.to_string()),
            (
                "single days".to_string(),
                analysis.days.single_days.to_string(),
            ),
            ("mixed-to-single ratio".to_string(), mixed_to_single),
        ];

        Self {
            summary,
            target_trades: ledger
                .records_for(&analysis.target_code)
                .cloned()
                .collect(),
            same_day: analysis.same_day.clone(),
            trend: analysis.trend.clone(),
        }
    }

    /// Looks up a summary value by key.
    #[must_use]
    pub fn summary_value(&self, key: &str) -> Option<&str> {
        self.summary
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
