//! Canonical trade-record representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Buy/sell side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Buy-side entry.
    Buy,
    /// Sell-side entry.
    Sell,
    /// Direction text present but not recognized.
    Unknown,
}

impl Direction {
    /// Parses a direction flag from ledger text.
    ///
    /// Brokerage exports label the side inconsistently; this accepts the
    /// common Chinese and English variants and falls back to
    /// [`Direction::Unknown`] for anything else.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match cleaned.as_str() {
            "买" | "买入" | "证券买入" | "担保品买入" | "buy" | "b" | "bought" => Self::Buy,
            "卖" | "卖出" | "证券卖出" | "担保品卖出" | "sell" | "s" | "sold" => Self::Sell,
            _ => Self::Unknown,
        }
    }

    /// Returns the direction as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single trade-ledger row in canonical form.
///
/// Only the security code and quantity are guaranteed; the remaining fields
/// are `None` when the source sheet did not expose the column or the cell
/// failed to parse. The quantity keeps its sign (sell-side rows may be
/// negative); analytics compare magnitudes via [`TradeRecord::volume`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Normalized security code.
    pub code: String,
    /// Signed trade quantity. Cells that fail numeric coercion become 0.
    pub quantity: f64,
    /// Gross trade amount, when the column resolved and the cell parsed.
    pub amount: Option<f64>,
    /// Unit trade price, when the column resolved and the cell parsed.
    pub price: Option<f64>,
    /// Trade date, when the column resolved and the cell parsed.
    pub date: Option<NaiveDate>,
    /// Buy/sell direction, when the column resolved.
    pub direction: Option<Direction>,
}

impl TradeRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub const fn new(code: String, quantity: f64) -> Self {
        Self {
            code,
            quantity,
            amount: None,
            price: None,
            date: None,
            direction: None,
        }
    }

    /// Returns the absolute trade volume.
    ///
    /// Volume comparisons throughout the analytics use magnitude, so a sell
    /// of -100 shares contributes 100 to volume totals.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.quantity.abs()
    }

    /// Returns whether this record is a buy-side entry.
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.direction == Some(Direction::Buy)
    }
}
