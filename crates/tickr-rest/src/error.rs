//! Error types for REST API operations

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::fmt;

/// A non-200 response, kept exactly as the server sent it
///
/// The body is not parsed: callers that care about the exchange's error
/// payload decode [`RawResponse::body`] themselves.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Full request URL, including the query string
    pub url: String,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Numeric status code
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.status, self.url)
    }
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Server answered with a status other than 200
    #[error("Unexpected HTTP status: {0}")]
    Status(RawResponse),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 body did not match the expected envelope
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Request URL
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request parameters could not be encoded as a query string
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Environment variable present but unusable
    #[error("Invalid value for environment variable {name}: {value:?}")]
    EnvVarInvalid {
        /// Variable name
        name: String,
        /// Value that failed to parse
        value: String,
    },
}

impl RestError {
    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(raw) => Some(raw.status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// The raw response for a non-200 status
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Status(raw) => Some(raw),
            _ => None,
        }
    }

    /// Check if this is a 4xx response
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Check if this is a 5xx response
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }
}

impl From<serde_urlencoded::ser::Error> for RestError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
