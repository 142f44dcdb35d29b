//! Response types for the Tickr public market-data REST API
//!
//! Every endpoint answers with the same [`ApiResponse`] envelope; the types in
//! this crate describe the `data` payloads it carries. They are plain
//! snapshots: nothing here talks to the network.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - `{status, message, count, data}` envelope
//! - [`Pair`] - Trading pair reference data with precision and limits
//! - [`Ticker`] - 24h statistics with a short close-price series
//! - [`Kline`], [`Timeframe`] - Candlestick bars
//! - [`Trade`], [`Side`] - Executed trades
//! - [`Orderbook`], [`Level`] - Order book snapshot

pub mod decimal;
pub mod enums;
pub mod envelope;
pub mod kline;
pub mod level;
pub mod pair;
pub mod ticker;
pub mod trade;

// Re-export commonly used types
pub use enums::*;
pub use envelope::*;
pub use kline::*;
pub use level::*;
pub use pair::*;
pub use ticker::*;
pub use trade::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
