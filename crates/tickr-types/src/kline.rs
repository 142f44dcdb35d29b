//! Candlestick bars

use crate::enums::Timeframe;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OHLCV bar returned by the kline service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kline {
    /// Pair symbol
    pub pair: String,
    /// Bar resolution
    #[serde(alias = "resolution")]
    pub timeframe: Timeframe,
    /// Bar open time (unix milliseconds)
    #[serde(alias = "time")]
    pub timestamp: u64,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub open: Decimal,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub high: Decimal,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub low: Decimal,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub close: Decimal,
    /// Traded volume in base asset
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub volume: Decimal,
}

impl Kline {
    /// High minus low
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Close above open
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Bar close time (unix milliseconds), when the timeframe has a fixed length
    pub fn close_time(&self) -> Option<u64> {
        self.timeframe
            .as_secs()?
            .checked_mul(1000)
            .and_then(|ms| self.timestamp.checked_add(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kline_parsing() {
        let json = r#"{
            "pair": "BTC_USDT",
            "timeframe": "1h",
            "timestamp": 1700000000000,
            "open": "50000",
            "high": "50500.5",
            "low": 49800,
            "close": "50250",
            "volume": "12.5"
        }"#;
        let kline: Kline = serde_json::from_str(json).unwrap();

        assert_eq!(kline.timeframe, Timeframe::H1);
        assert_eq!(kline.range(), dec!(700.5));
        assert!(kline.is_bullish());
        assert_eq!(kline.close_time(), Some(1700003600000));
    }

    #[test]
    fn test_kline_resolution_alias() {
        let json = r#"{
            "pair": "ETH_USDT", "resolution": "2h", "time": 1,
            "open": 2, "high": 3, "low": 1, "close": 1.5, "volume": 0
        }"#;
        let kline: Kline = serde_json::from_str(json).unwrap();

        assert_eq!(kline.timeframe, Timeframe::Other("2h".to_string()));
        assert!(!kline.is_bullish());
        assert_eq!(kline.close_time(), None);
    }

    #[test]
    fn test_close_time_overflow() {
        let json = format!(
            r#"{{"pair": "BTC_USDT", "timeframe": "1M", "timestamp": {},
                "open": 1, "high": 1, "low": 1, "close": 1, "volume": 1}}"#,
            u64::MAX - 10
        );
        let kline: Kline = serde_json::from_str(&json).unwrap();

        assert_eq!(kline.close_time(), None);
    }
}
