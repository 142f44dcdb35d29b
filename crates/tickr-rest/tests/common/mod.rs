//! Shared fixtures for client tests

#![allow(dead_code)]

use tickr_rest::{ClientConfig, TickrRestClient};
use wiremock::MockServer;

pub const ORDERBOOK_RESPONSE: &str = r#"{
    "status": "success",
    "message": "",
    "data": {
        "bids": [["49999.00", "1.25"], ["49998.50", "0.40"]],
        "asks": [["50001.00", "0.75"], ["50002.00", "2.00"]]
    }
}"#;

pub const TRADES_RESPONSE: &str = r#"{
    "status": "success",
    "message": "",
    "count": 2,
    "data": [
        ["0.010", "50000.00", "buy", 1700000000000],
        ["0.250", "50001.50", "sell", 1700000000500]
    ]
}"#;

pub const PAIR_OBJECT: &str = r#"{
    "id": 1,
    "symbol": "BTC_USDT",
    "base": "BTC",
    "quote": "USDT",
    "precision": {"price": 2, "quantity": 6, "total": 2},
    "limits": {"minQuantity": "0.0001", "minTotal": "5"},
    "isActive": true,
    "createdAt": "2023-04-01T00:00:00Z",
    "updatedAt": "2024-01-15T12:30:00Z",
    "listingPrice": "28000",
    "tradingMode": "normal"
}"#;

pub const TICKER_OBJECT: &str = r#"{
    "pair": "BTC_USDT",
    "bid": "49999.00",
    "ask": "50001.00",
    "last": "50000.00",
    "change": "500",
    "changePercent": "1.01",
    "high": "50500",
    "low": "49000",
    "volume": "321.5",
    "quoteVolume": "16075000",
    "closes": [{"time": 1700000000000, "price": "49900"}, {"time": 1700003600000, "price": "50000"}]
}"#;

pub const KLINES_RESPONSE: &str = r#"{
    "status": "success",
    "message": "",
    "count": 2,
    "data": [
        {"pair": "BTC_USDT", "timeframe": "1h", "timestamp": 1700000000000,
         "open": "49900", "high": "50100", "low": "49800", "close": "50000", "volume": "12.5"},
        {"pair": "BTC_USDT", "timeframe": "1h", "timestamp": 1700003600000,
         "open": "50000", "high": "50200", "low": "49950", "close": "49980", "volume": "8.25"}
    ]
}"#;

pub fn pair_response() -> String {
    format!(r#"{{"status": "success", "message": "", "data": {PAIR_OBJECT}}}"#)
}

pub fn pairs_response() -> String {
    format!(r#"{{"status": "success", "message": "", "count": 1, "data": [{PAIR_OBJECT}]}}"#)
}

pub fn ticker_response() -> String {
    format!(r#"{{"status": "success", "message": "", "data": {TICKER_OBJECT}}}"#)
}

pub fn tickers_response() -> String {
    format!(r#"{{"status": "success", "message": "", "count": 1, "data": [{TICKER_OBJECT}]}}"#)
}

/// Client whose API and kline hosts both point at `server`
pub fn client_for(server: &MockServer) -> TickrRestClient {
    client_for_hosts(server, server)
}

/// Client with separate API and kline hosts
pub fn client_for_hosts(api: &MockServer, kline: &MockServer) -> TickrRestClient {
    let config = ClientConfig::new()
        .with_api_url(api.uri())
        .with_kline_url(kline.uri())
        .with_user_agent("tickr-tests");
    TickrRestClient::with_config(config).expect("valid mock config")
}
