//! Candlestick endpoint on the dedicated kline host

use super::Route;
use crate::error::RestResult;
use crate::params::{self, KlineParams};
use reqwest::Client;
use tickr_types::{ApiResponse, Kline};
use tracing::{debug, instrument};

/// Kline service endpoints
pub struct KlineEndpoints<'a> {
    route: Route<'a>,
}

impl<'a> KlineEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, user_agent: &'a str) -> Self {
        Self {
            route: Route {
                client,
                base_url,
                user_agent,
            },
        }
    }

    /// Get klines for a pair
    ///
    /// The resolution and window are sent as given; bars come back in the
    /// order the service returns them.
    #[instrument(skip(self))]
    pub async fn get_klines(&self, params: &KlineParams) -> RestResult<ApiResponse<Vec<Kline>>> {
        debug!("Fetching {} klines for {}", params.resolution, params.pair);
        self.route
            .get_json("/v1/market/kline", &params::encode(params)?)
            .await
    }
}
