//! Query parameter records for each endpoint
//!
//! Fields are forwarded verbatim; `None` fields are left out of the query
//! string entirely.

use crate::error::RestResult;
use serde::Serialize;
use tickr_types::Timeframe;

/// Parameters for endpoints that take a single pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairParams {
    /// Pair symbol, e.g. "BTC_USDT"
    pub pair: String,
}

impl PairParams {
    pub fn new(pair: impl Into<String>) -> Self {
        Self { pair: pair.into() }
    }
}

/// Parameters for `/api/book`
pub type BookParams = PairParams;

/// Parameters for `/api/ticker`
pub type TickerParams = PairParams;

/// Parameters for `/api/trades`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradesParams {
    /// Pair symbol
    pub pair: String,
    /// Number of trades to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Maximum number of trades to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TradesParams {
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            offset: None,
            limit: None,
        }
    }

    /// Set pagination offset
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Parameters for `/v1/market/kline`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KlineParams {
    /// Pair symbol
    pub pair: String,
    /// Bar resolution
    pub resolution: Timeframe,
    /// Window start (unix timestamp, forwarded unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    /// Window end (unix timestamp, forwarded unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<u64>,
    /// Number of bars to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl KlineParams {
    pub fn new(pair: impl Into<String>, resolution: Timeframe) -> Self {
        Self {
            pair: pair.into(),
            resolution,
            from: None,
            to: None,
            offset: None,
        }
    }

    /// Restrict to the `[from, to]` window
    pub fn with_window(mut self, from: u64, to: u64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Set window start only
    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Set window end only
    pub fn with_to(mut self, to: u64) -> Self {
        self.to = Some(to);
        self
    }

    /// Set pagination offset
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Encode a parameter record as a query string (without the leading `?`)
pub(crate) fn encode<Q: Serialize + ?Sized>(params: &Q) -> RestResult<String> {
    Ok(serde_urlencoded::to_string(params)?)
}
