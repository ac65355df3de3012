//! Errors raised while loading a page of the catalog.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Why a page could not be loaded.
///
/// All variants are caught at the fetch boundary: they are logged and kept
/// on the state snapshot, and never abort the dashboard.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (refused, DNS, timeout).
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpStatus {
        url: String,
        status: u16,
        message: String,
    },

    /// The body was not the expected `{ book, totalCount }` shape.
    #[error("malformed payload from {url}: {message}")]
    MalformedPayload { url: String, message: String },
}

impl FetchError {
    /// Build a [`FetchError::Network`] from a transport error.
    pub fn network(url: &str, err: &HttpError) -> Self {
        FetchError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Category used for retry decisions and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Network { .. } => ErrorCategory::Network,
            FetchError::HttpStatus { status, .. } => {
                if *status >= 500 || *status == 408 || *status == 429 {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Client
                }
            }
            FetchError::MalformedPayload { .. } => ErrorCategory::Client,
        }
    }

    /// Whether pressing retry has a reasonable chance to succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "E_FETCH_NET",
            FetchError::HttpStatus { .. } => "E_FETCH_HTTP",
            FetchError::MalformedPayload { .. } => "E_FETCH_PAYLOAD",
        }
    }

    /// One-line message for the footer.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network { .. } => "Could not reach the catalog API".to_string(),
            FetchError::HttpStatus { status, .. } => match *status {
                404 => "The catalog endpoint was not found (HTTP 404)".to_string(),
                500..=599 => format!("The catalog API failed (HTTP {})", status),
                _ => format!("The catalog API refused the request (HTTP {})", status),
            },
            FetchError::MalformedPayload { .. } => {
                "The catalog API returned an unexpected payload".to_string()
            }
        }
    }
}
