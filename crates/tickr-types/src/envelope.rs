//! Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

/// Status string the exchange uses for a successful call
pub const STATUS_SUCCESS: &str = "success";

/// Standard Tickr API response wrapper
///
/// The client hands this back untouched; `status` and `message` are whatever
/// the server wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// `"success"` on a good call
    pub status: String,
    /// Human-readable message, often empty
    #[serde(default)]
    pub message: String,
    /// Number of items in `data`, on list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Endpoint payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Check if the server reported success
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_SUCCESS)
    }

    /// Drop the envelope and keep the payload
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload, keeping status fields
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            message: self.message,
            count: self.count,
            data: f(self.data),
        }
    }
}
