//! Order book levels and snapshots

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price level in the order book
///
/// On the wire this is the two-element tuple `[price, quantity]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LevelTuple", into = "LevelTuple")]
pub struct Level {
    /// Price of this level
    pub price: Decimal,
    /// Quantity resting at this price
    pub qty: Decimal,
}

#[derive(Serialize, Deserialize)]
struct LevelTuple(
    #[serde(deserialize_with = "crate::decimal::deserialize")] Decimal,
    #[serde(deserialize_with = "crate::decimal::deserialize")] Decimal,
);

impl From<LevelTuple> for Level {
    fn from(LevelTuple(price, qty): LevelTuple) -> Self {
        Self { price, qty }
    }
}

impl From<Level> for LevelTuple {
    fn from(level: Level) -> Self {
        LevelTuple(level.price, level.qty)
    }
}

impl Level {
    /// Create a new price level
    pub fn new(price: Decimal, qty: Decimal) -> Self {
        Self { price, qty }
    }

    /// Price times quantity
    pub fn notional(&self) -> Decimal {
        self.price * self.qty
    }
}

/// Order book snapshot returned by `/api/book`
///
/// Levels are kept in the order the server sent them; the exchange lists the
/// best price first on each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orderbook {
    /// Bid levels, best first
    #[serde(default)]
    pub bids: Vec<Level>,
    /// Ask levels, best first
    #[serde(default)]
    pub asks: Vec<Level>,
}

impl Orderbook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|l| l.price)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|l| l.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Get the mid price
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()? + self.best_bid()?) / Decimal::TWO)
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
