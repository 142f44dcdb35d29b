//! API endpoint implementations

pub mod kline;
pub mod market;

pub use kline::KlineEndpoints;
pub use market::MarketEndpoints;

use crate::error::{RawResponse, RestError, RestResult};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tickr_types::ApiResponse;
use tracing::{debug, warn};

/// Borrowed transport plus one base URL
#[derive(Debug, Clone, Copy)]
pub(crate) struct Route<'a> {
    pub(crate) client: &'a Client,
    pub(crate) base_url: &'a str,
    pub(crate) user_agent: &'a str,
}

impl Route<'_> {
    /// Full URL for `path` with an already-encoded query string
    pub(crate) fn url(&self, path: &str, query: &str) -> String {
        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Issue one GET and decode the envelope
    ///
    /// Anything but `200 OK` comes back as [`RestError::Status`] with the
    /// body untouched.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> RestResult<ApiResponse<T>> {
        let url = self.url(path, query);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let headers = response.headers().clone();
            let body = response.text().await?;
            warn!(%url, %status, "Request rejected");
            return Err(RestError::Status(RawResponse {
                status,
                url,
                headers,
                body,
            }));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| RestError::Decode { url, source })
    }
}
