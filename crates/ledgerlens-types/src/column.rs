//! Canonical column vocabulary.

use serde::{Deserialize, Serialize};

/// A column of the canonical trade-record schema.
///
/// Every ingested sheet is normalized into this fixed vocabulary. A sheet
/// only produces records when both [`Column::Code`] and [`Column::Quantity`]
/// resolve; the remaining columns are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Security code identifying the traded instrument.
    Code,
    /// Signed trade quantity (negative for sell-side entries).
    Quantity,
    /// Gross trade amount (settlement value).
    Amount,
    /// Unit trade price.
    Price,
    /// Calendar date of the trade.
    Date,
    /// Buy/sell direction flag.
    Direction,
}

impl Column {
    /// Returns all canonical columns in schema order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Code,
            Self::Quantity,
            Self::Amount,
            Self::Price,
            Self::Date,
            Self::Direction,
        ]
    }

    /// Returns the display name of this column.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Code => "security code",
            Self::Quantity => "trade quantity",
            Self::Amount => "trade amount",
            Self::Price => "trade price",
            Self::Date => "trade date",
            Self::Direction => "direction",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
