//! Executed trades

use crate::enums::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Public trade returned by `/api/trades`
///
/// On the wire this is the fixed-position tuple
/// `[quantity, price, maker_side, timestamp_ms]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TradeTuple", into = "TradeTuple")]
pub struct Trade {
    /// Executed quantity in base asset
    pub quantity: Decimal,
    /// Execution price
    pub price: Decimal,
    /// Side of the resting (maker) order
    pub maker_side: Side,
    /// Execution time (unix milliseconds)
    pub timestamp_ms: u64,
}

#[derive(Serialize, Deserialize)]
struct TradeTuple(
    #[serde(deserialize_with = "crate::decimal::deserialize")] Decimal,
    #[serde(deserialize_with = "crate::decimal::deserialize")] Decimal,
    Side,
    u64,
);

impl From<TradeTuple> for Trade {
    fn from(TradeTuple(quantity, price, maker_side, timestamp_ms): TradeTuple) -> Self {
        Self {
            quantity,
            price,
            maker_side,
            timestamp_ms,
        }
    }
}

impl From<Trade> for TradeTuple {
    fn from(t: Trade) -> Self {
        TradeTuple(t.quantity, t.price, t.maker_side, t.timestamp_ms)
    }
}

impl Trade {
    /// Price times quantity
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }

    /// Side of the aggressing (taker) order
    pub fn taker_side(&self) -> Side {
        self.maker_side.opposite()
    }
}
