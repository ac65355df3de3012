//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

use super::category::ErrorCategory;

/// Errors that stop the dashboard from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::AppConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value was present but unusable.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Configuration errors are always fixed by the user.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}
