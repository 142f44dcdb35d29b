//! Public market data endpoints on the main API host

use super::Route;
use crate::error::RestResult;
use crate::params::{self, BookParams, PairParams, TickerParams, TradesParams};
use reqwest::Client;
use tickr_types::{ApiResponse, Orderbook, Pair, Ticker, Trade};
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    route: Route<'a>,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, user_agent: &'a str) -> Self {
        Self {
            route: Route {
                client,
                base_url,
                user_agent,
            },
        }
    }

    /// Get the order book for a pair
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, params: &BookParams) -> RestResult<ApiResponse<Orderbook>> {
        debug!("Fetching orderbook for {}", params.pair);
        self.route.get_json("/api/book", &params::encode(params)?).await
    }

    /// Get recent trades for a pair
    ///
    /// `offset` and `limit` are passed through for paging; the client never
    /// walks pages itself.
    #[instrument(skip(self))]
    pub async fn get_trades(&self, params: &TradesParams) -> RestResult<ApiResponse<Vec<Trade>>> {
        debug!("Fetching trades for {}", params.pair);
        self.route.get_json("/api/trades", &params::encode(params)?).await
    }

    /// Get every trading pair
    #[instrument(skip(self))]
    pub async fn get_pairs(&self) -> RestResult<ApiResponse<Vec<Pair>>> {
        debug!("Fetching pairs");
        self.route.get_json("/api/pairs", "").await
    }

    /// Get a single trading pair
    #[instrument(skip(self))]
    pub async fn get_pair(&self, params: &PairParams) -> RestResult<ApiResponse<Pair>> {
        debug!("Fetching pair {}", params.pair);
        self.route.get_json("/api/pair", &params::encode(params)?).await
    }

    /// Get tickers for every pair
    #[instrument(skip(self))]
    pub async fn get_tickers(&self) -> RestResult<ApiResponse<Vec<Ticker>>> {
        debug!("Fetching tickers");
        self.route.get_json("/api/tickers", "").await
    }

    /// Get the ticker for a pair
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, params: &TickerParams) -> RestResult<ApiResponse<Ticker>> {
        debug!("Fetching ticker for {}", params.pair);
        self.route.get_json("/api/ticker", &params::encode(params)?).await
    }
}
