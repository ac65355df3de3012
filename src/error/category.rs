//! Error category classification.
//!
//! Categories drive the retry hint shown in the footer and the `category`
//! field attached to log lines.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport problems (connection refused, DNS, timeout).
    /// Generally transient and retryable.
    Network,

    /// The backend answered with a 5xx (or 408/429).
    /// Retryable after a moment.
    Server,

    /// The backend answered with something we cannot use
    /// (4xx, unexpected body). Not retryable as-is.
    Client,

    /// Missing or invalid settings. Fixed by the user, not by retrying.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "check that the catalog API is reachable, then press r to retry",
            ErrorCategory::Server => "press r to retry",
            ErrorCategory::Client => "check that the API version matches, then scroll to reload",
            ErrorCategory::Configuration => "fix the configuration and restart",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
