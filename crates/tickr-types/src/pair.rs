//! Trading pair reference data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places the exchange accepts for each order field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairPrecision {
    /// Price decimals
    #[serde(default)]
    pub price: u32,
    /// Quantity decimals
    #[serde(default)]
    pub quantity: u32,
    /// Order total (price * quantity) decimals
    #[serde(default)]
    pub total: u32,
}

/// Order size and price bounds for a pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairLimits {
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub min_quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub max_quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub max_price: Option<Decimal>,
    /// Smallest accepted order value in quote currency
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub min_total: Option<Decimal>,
}

/// Trading pair returned by `/api/pairs` and `/api/pair`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    /// Exchange-assigned identifier
    pub id: u64,
    /// Pair symbol, as accepted by the `pair` query parameter
    pub symbol: String,
    /// Base asset
    pub base: String,
    /// Quote asset
    pub quote: String,
    #[serde(default)]
    pub precision: PairPrecision,
    #[serde(default)]
    pub limits: PairLimits,
    /// Whether the pair currently accepts orders
    #[serde(default)]
    pub is_active: bool,
    /// Creation time as sent by the server
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time as sent by the server
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Reference price the pair was listed at
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub listing_price: Option<Decimal>,
    /// Trading mode string (e.g. "normal", "post_only"), passed through as-is
    #[serde(default)]
    pub trading_mode: Option<String>,
}

impl Pair {
    /// Smallest order quantity the exchange accepts, if it publishes one
    pub fn min_order_quantity(&self) -> Option<Decimal> {
        self.limits.min_quantity
    }

    /// Round a price down to the pair's price precision
    pub fn round_price(&self, price: Decimal) -> Decimal {
        price.trunc_with_scale(self.precision.price)
    }

    /// Round a quantity down to the pair's quantity precision
    pub fn round_quantity(&self, qty: Decimal) -> Decimal {
        qty.trunc_with_scale(self.precision.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const PAIR_JSON: &str = r#"{
        "id": 7,
        "symbol": "BTC_USDT",
        "base": "BTC",
        "quote": "USDT",
        "precision": {"price": 2, "quantity": 6, "total": 2},
        "limits": {"minQuantity": "0.0001", "maxQuantity": 100, "minTotal": "5"},
        "isActive": true,
        "createdAt": "2023-04-01T00:00:00Z",
        "updatedAt": "2024-01-15T12:30:00Z",
        "listingPrice": "28000.00",
        "tradingMode": "normal"
    }"#;

    #[test]
    fn test_pair_parsing() {
        let pair: Pair = serde_json::from_str(PAIR_JSON).unwrap();

        assert_eq!(pair.id, 7);
        assert_eq!(pair.symbol, "BTC_USDT");
        assert_eq!(pair.precision.quantity, 6);
        assert_eq!(pair.min_order_quantity(), Some(dec!(0.0001)));
        assert_eq!(pair.limits.max_quantity, Some(dec!(100)));
        assert_eq!(pair.limits.min_price, None);
        assert!(pair.is_active);
        assert_eq!(pair.listing_price, Some(dec!(28000.00)));
        assert_eq!(pair.trading_mode.as_deref(), Some("normal"));
    }

    #[test]
    fn test_pair_minimal() {
        let json = r#"{"id": 1, "symbol": "ETH_BTC", "base": "ETH", "quote": "BTC"}"#;
        let pair: Pair = serde_json::from_str(json).unwrap();

        assert!(!pair.is_active);
        assert_eq!(pair.precision, PairPrecision::default());
        assert_eq!(pair.listing_price, None);
    }

    #[test]
    fn test_rounding_to_precision() {
        let pair: Pair = serde_json::from_str(PAIR_JSON).unwrap();
        assert_eq!(pair.round_price(dec!(50000.129)), dec!(50000.12));
        assert_eq!(pair.round_quantity(dec!(0.12345678)), dec!(0.123456));
    }
}
