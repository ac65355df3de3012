//! Error types for bookstock.
//!
//! - [`FetchError`]: a page could not be loaded (network, HTTP status,
//!   malformed payload). Logged and kept on the state snapshot.
//! - [`ConfigError`]: startup configuration problems.
//! - [`ErrorCategory`]: coarse classification used for retry hints.
//!
//! | Error | Category | Retryable |
//! |-------|----------|-----------|
//! | `FetchError::Network` | Network | Yes |
//! | `FetchError::HttpStatus` 5xx/408/429 | Server | Yes |
//! | `FetchError::HttpStatus` other | Client | No |
//! | `FetchError::MalformedPayload` | Client | No |
//! | `ConfigError::*` | Configuration | No |

mod category;
mod config;
mod fetch;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use fetch::FetchError;

/// Result alias for page loads.
pub type FetchResult<T> = Result<T, FetchError>;
