//! 24h ticker statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the recent close-price series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosePoint {
    /// Bar open time (unix milliseconds)
    pub time: u64,
    /// Close price
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub price: Decimal,
}

/// Ticker returned by `/api/tickers` and `/api/ticker`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Pair symbol
    pub pair: String,
    /// Best bid
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub bid: Option<Decimal>,
    /// Best ask
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub ask: Option<Decimal>,
    /// Last traded price
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub last: Option<Decimal>,
    /// Absolute 24h price change
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub change: Option<Decimal>,
    /// 24h price change in percent
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub change_percent: Option<Decimal>,
    /// 24h high
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub high: Option<Decimal>,
    /// 24h low
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub low: Option<Decimal>,
    /// 24h volume in base asset
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub volume: Option<Decimal>,
    /// 24h volume in quote asset
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub quote_volume: Option<Decimal>,
    /// Recent close prices, oldest first
    #[serde(default)]
    pub closes: Vec<ClosePoint>,
}

impl Ticker {
    /// Ask minus bid
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask? - self.bid?)
    }

    /// Average of bid and ask
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.ask? + self.bid?) / Decimal::TWO)
    }

    /// Spread in basis points of the mid price
    pub fn spread_bps(&self) -> Option<Decimal> {
        let mid = self.mid_price()?;
        if mid.is_zero() {
            return None;
        }
        Some(self.spread()? / mid * Decimal::from(10000))
    }

    /// Most recent point of the close series
    pub fn latest_close(&self) -> Option<&ClosePoint> {
        self.closes.last()
    }
}
