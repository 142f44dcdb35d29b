//! REST API client for Tickr public market data
//!
//! Typed access to the exchange's public endpoints: order books, trades,
//! trading pairs, tickers and klines. Every call is a single GET whose JSON
//! envelope is returned as-is.
//!
//! # Endpoints
//!
//! | Method | Path | Host |
//! |---|---|---|
//! | [`TickrRestClient::get_orderbook`] | `/api/book` | API |
//! | [`TickrRestClient::get_trades`] | `/api/trades` | API |
//! | [`TickrRestClient::get_pairs`] | `/api/pairs` | API |
//! | [`TickrRestClient::get_pair`] | `/api/pair` | API |
//! | [`TickrRestClient::get_tickers`] | `/api/tickers` | API |
//! | [`TickrRestClient::get_ticker`] | `/api/ticker` | API |
//! | [`TickrRestClient::get_klines`] | `/v1/market/kline` | Kline |
//!
//! # Errors
//!
//! Any status other than `200 OK` is returned as [`RestError::Status`]
//! holding the raw response; the client does not retry.
//!
//! # Example
//!
//! ```no_run
//! use tickr_rest::{ClientConfig, TickrRestClient, TradesParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TickrRestClient::with_config(ClientConfig::from_env()?)?;
//!
//!     let trades = client
//!         .get_trades(&TradesParams::new("BTC_USDT").with_offset(100))
//!         .await?;
//!     for trade in &trades.data {
//!         println!("{} @ {}", trade.quantity, trade.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;

// Re-export main types
pub use client::{ClientConfig, TickrRestClient};
pub use error::{RawResponse, RestError, RestResult};
pub use params::{BookParams, KlineParams, PairParams, TickerParams, TradesParams};

// Re-export response types
pub use tickr_types::{
    ApiResponse, Kline, Level, Orderbook, Pair, Side, Ticker, Timeframe, Trade,
};
