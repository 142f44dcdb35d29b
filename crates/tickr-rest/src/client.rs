//! Main REST client implementation

use crate::endpoints::{KlineEndpoints, MarketEndpoints};
use crate::error::{RestError, RestResult};
use crate::params::{BookParams, KlineParams, PairParams, TickerParams, TradesParams};
use reqwest::{Client, Url};
use std::time::Duration;
use tickr_types::{ApiResponse, Kline, Orderbook, Pair, Ticker, Trade};
use tracing::info;

/// Default base URL for `/api/*` endpoints
pub const DEFAULT_API_URL: &str = "https://api.tickr.exchange";

/// Default base URL for the kline service
pub const DEFAULT_KLINE_URL: &str = "https://kline.tickr.exchange";

/// Default user agent
pub const DEFAULT_USER_AGENT: &str = concat!("tickr-rest/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding [`ClientConfig::api_url`]
pub const ENV_API_URL: &str = "TICKR_API_URL";
/// Environment variable overriding [`ClientConfig::kline_url`]
pub const ENV_KLINE_URL: &str = "TICKR_KLINE_URL";
/// Environment variable setting [`ClientConfig::timeout`] in seconds
pub const ENV_TIMEOUT_SECS: &str = "TICKR_TIMEOUT_SECS";

/// Tickr REST API client
///
/// Cheap to clone: clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use tickr_rest::{TickrRestClient, KlineParams, PairParams};
/// use tickr_types::Timeframe;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TickrRestClient::new();
///
///     let ticker = client.get_ticker(&PairParams::new("BTC_USDT")).await?;
///     println!("last: {:?}", ticker.data.last);
///
///     let klines = client
///         .get_klines(&KlineParams::new("BTC_USDT", Timeframe::H1))
///         .await?;
///     println!("{} bars", klines.data.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TickrRestClient {
    http_client: Client,
    api_url: String,
    kline_url: String,
    user_agent: String,
}

impl TickrRestClient {
    /// Create a client against the default hosts
    pub fn new() -> Self {
        let config = ClientConfig::default();
        Self::from_parts(config, Client::new())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| RestError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::from_parts(config, http_client))
    }

    /// Create a client around a caller-built `reqwest::Client`
    ///
    /// Transport settings (proxies, TLS, pool sizes, timeouts) come from
    /// `http_client`; `config.timeout` is ignored.
    pub fn with_http_client(config: ClientConfig, http_client: Client) -> RestResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, http_client))
    }

    fn from_parts(config: ClientConfig, http_client: Client) -> Self {
        info!(
            api_url = %config.api_url,
            kline_url = %config.kline_url,
            "Created Tickr REST client"
        );

        Self {
            http_client,
            api_url: config.api_url,
            kline_url: config.kline_url,
            user_agent: config
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Base URL for `/api/*` endpoints
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Base URL for the kline service
    pub fn kline_url(&self) -> &str {
        &self.kline_url
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, &self.api_url, &self.user_agent)
    }

    /// Get the order book for a pair
    pub async fn get_orderbook(&self, params: &BookParams) -> RestResult<ApiResponse<Orderbook>> {
        self.market().get_orderbook(params).await
    }

    /// Get recent trades for a pair
    pub async fn get_trades(&self, params: &TradesParams) -> RestResult<ApiResponse<Vec<Trade>>> {
        self.market().get_trades(params).await
    }

    /// Get every trading pair
    pub async fn get_pairs(&self) -> RestResult<ApiResponse<Vec<Pair>>> {
        self.market().get_pairs().await
    }

    /// Get a single trading pair
    pub async fn get_pair(&self, params: &PairParams) -> RestResult<ApiResponse<Pair>> {
        self.market().get_pair(params).await
    }

    /// Get tickers for every pair
    pub async fn get_tickers(&self) -> RestResult<ApiResponse<Vec<Ticker>>> {
        self.market().get_tickers().await
    }

    /// Get the ticker for a pair
    pub async fn get_ticker(&self, params: &TickerParams) -> RestResult<ApiResponse<Ticker>> {
        self.market().get_ticker(params).await
    }

    // ========================================================================
    // Kline Endpoints
    // ========================================================================

    /// Get kline endpoints
    pub fn klines(&self) -> KlineEndpoints<'_> {
        KlineEndpoints::new(&self.http_client, &self.kline_url, &self.user_agent)
    }

    /// Get klines for a pair
    pub async fn get_klines(&self, params: &KlineParams) -> RestResult<ApiResponse<Vec<Kline>>> {
        self.klines().get_klines(params).await
    }
}

impl Default for TickrRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TickrRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickrRestClient")
            .field("api_url", &self.api_url)
            .field("kline_url", &self.kline_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for `/api/*` endpoints
    pub api_url: String,
    /// Base URL for the kline service
    pub kline_url: String,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            kline_url: DEFAULT_KLINE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from `TICKR_API_URL`, `TICKR_KLINE_URL` and
    /// `TICKR_TIMEOUT_SECS`, keeping defaults for unset variables
    pub fn from_env() -> RestResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RestResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(url) = lookup(ENV_KLINE_URL) {
            config.kline_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = value.trim().parse().map_err(|_| RestError::EnvVarInvalid {
                name: ENV_TIMEOUT_SECS.to_string(),
                value: value.clone(),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set base URL for `/api/*` endpoints
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set base URL for the kline service
    pub fn with_kline_url(mut self, url: impl Into<String>) -> Self {
        self.kline_url = url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn validate(&self) -> RestResult<()> {
        validate_base_url("api_url", &self.api_url)?;
        validate_base_url("kline_url", &self.kline_url)
    }
}

fn validate_base_url(field: &str, url: &str) -> RestResult<()> {
    let parsed =
        Url::parse(url).map_err(|e| RestError::InvalidConfig(format!("{field} {url:?}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(RestError::InvalidConfig(format!(
            "{field} {url:?}: unsupported scheme {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_hosts() {
        let client = TickrRestClient::new();
        assert_eq!(client.api_url(), DEFAULT_API_URL);
        assert_eq!(client.kline_url(), DEFAULT_KLINE_URL);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_api_url("http://localhost:8080")
            .with_kline_url("http://localhost:8081")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");

        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        let client = TickrRestClient::with_config(config).unwrap();
        assert_eq!(client.api_url(), "http://localhost:8080");
        assert_eq!(client.kline_url(), "http://localhost:8081");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = TickrRestClient::with_config(ClientConfig::new().with_api_url("not a url"));
        assert!(matches!(result, Err(RestError::InvalidConfig(_))));

        let result =
            TickrRestClient::with_config(ClientConfig::new().with_kline_url("ftp://kline.host"));
        assert!(matches!(result, Err(RestError::InvalidConfig(_))));
    }

    #[test]
    fn test_with_http_client() {
        let http = Client::new();
        let client = TickrRestClient::with_http_client(ClientConfig::default(), http).unwrap();
        assert_eq!(client.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_URL, "http://127.0.0.1:9000"),
            (ENV_TIMEOUT_SECS, "15"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.kline_url, DEFAULT_KLINE_URL);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_config_bad_timeout() {
        let result = ClientConfig::from_lookup(|k| {
            (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(RestError::EnvVarInvalid { .. })));
    }
}
