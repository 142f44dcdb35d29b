//! Side and Timeframe enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    #[serde(alias = "BUY", alias = "Buy")]
    Buy,
    /// Sell order
    #[serde(alias = "SELL", alias = "Sell")]
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns the side as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kline resolution
///
/// Sent as the `resolution` query parameter and echoed back on each
/// [`Kline`](crate::Kline). Values the exchange adds later are carried in
/// [`Timeframe::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timeframe {
    /// 1 minute
    M1,
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 1 hour
    H1,
    /// 4 hours
    H4,
    /// 12 hours
    H12,
    /// 1 day
    D1,
    /// 1 week
    W1,
    /// 1 month
    Mo1,
    /// Any resolution string without a named variant
    Other(String),
}

impl Timeframe {
    /// Every named resolution, shortest first
    pub const ALL: [Timeframe; 10] = [
        Self::M1,
        Self::M5,
        Self::M15,
        Self::M30,
        Self::H1,
        Self::H4,
        Self::H12,
        Self::D1,
        Self::W1,
        Self::Mo1,
    ];

    /// Returns the resolution string as used on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::H12 => "12h",
            Self::D1 => "1d",
            Self::W1 => "1w",
            Self::Mo1 => "1M",
            Self::Other(s) => s,
        }
    }

    /// Bar length in seconds, for the named resolutions
    ///
    /// A month is counted as 30 days.
    pub fn as_secs(&self) -> Option<u64> {
        let secs = match self {
            Self::M1 => 60,
            Self::M5 => 300,
            Self::M15 => 900,
            Self::M30 => 1_800,
            Self::H1 => 3_600,
            Self::H4 => 14_400,
            Self::H12 => 43_200,
            Self::D1 => 86_400,
            Self::W1 => 604_800,
            Self::Mo1 => 2_592_000,
            Self::Other(_) => return None,
        };
        Some(secs)
    }
}

impl From<&str> for Timeframe {
    fn from(s: &str) -> Self {
        match s {
            "1m" => Self::M1,
            "5m" => Self::M5,
            "15m" => Self::M15,
            "30m" => Self::M30,
            "1h" => Self::H1,
            "4h" => Self::H4,
            "12h" => Self::H12,
            "1d" => Self::D1,
            "1w" => Self::W1,
            "1M" => Self::Mo1,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Timeframe {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            named => named,
        }
    }
}

impl From<Timeframe> for String {
    fn from(tf: Timeframe) -> Self {
        match tf {
            Timeframe::Other(s) => s,
            named => named.as_str().to_string(),
        }
    }
}

impl FromStr for Timeframe {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        let parsed: Side = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(parsed, Side::Sell);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_timeframe_serde() {
        assert_eq!(serde_json::to_string(&Timeframe::H4).unwrap(), "\"4h\"");
        assert_eq!(serde_json::to_string(&Timeframe::Mo1).unwrap(), "\"1M\"");

        let parsed: Timeframe = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(parsed, Timeframe::M15);
    }

    #[test]
    fn test_timeframe_unknown_passes_through() {
        let parsed: Timeframe = serde_json::from_str("\"3m\"").unwrap();
        assert_eq!(parsed, Timeframe::Other("3m".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"3m\"");
        assert_eq!(parsed.as_secs(), None);
    }

    #[test]
    fn test_timeframe_names_are_distinct() {
        for tf in Timeframe::ALL.iter() {
            assert_eq!(&Timeframe::from(tf.as_str()), tf);
            assert!(tf.as_secs().is_some());
        }
    }
}
