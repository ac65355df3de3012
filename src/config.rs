//! Startup configuration.
//!
//! Sources, later wins: built-in defaults, an optional TOML file,
//! environment variables, then command-line flags. The result is read once
//! in `main` and injected into the catalog client; nothing reads the
//! environment after startup.
//!
//! ```toml
//! # ~/.config/bookstock/config.toml
//! api_base_url = "http://localhost:3000"
//! request_timeout_secs = 15
//! log_filter = "bookstock=debug"
//! log_file = "/tmp/bookstock.log"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default API location when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "BOOKSTOCK_API_URL";
/// Environment variable overriding the log filter.
pub const ENV_LOG: &str = "BOOKSTOCK_LOG";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "BOOKSTOCK_LOG_FILE";
/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "BOOKSTOCK_TIMEOUT_SECS";

/// Resolved configuration.
///
/// # Example
///
/// ```
/// use bookstock::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_base_url("http://books.internal:8080/")
///     .with_request_timeout_secs(10);
/// assert_eq!(config.api_base_url, "http://books.internal:8080/");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the catalog API (the `/books` endpoint lives below it)
    pub api_base_url: String,
    /// Per-request timeout; `None` keeps the transport default
    pub request_timeout_secs: Option<u64>,
    /// `RUST_LOG`-style filter directive
    pub log_filter: String,
    /// Where log lines go; the terminal belongs to the TUI
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Set the tracing filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Load from `path` (or the default location), then apply environment
    /// overrides, then validate.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_overrides(path, None)
    }

    /// Like [`AppConfig::load`], with a command-line API URL applied after
    /// the environment. Validation runs once, on the merged result, so a bad
    /// value in a source that a later one replaces is never reported.
    pub fn load_with_overrides(
        path: Option<&Path>,
        api_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_file() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env_overrides();
        if let Some(url) = api_url {
            config.api_base_url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply `BOOKSTOCK_*` and `RUST_LOG` variables.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(ENV_API_URL) {
            self.api_base_url = val;
        }
        if let Ok(val) = std::env::var(ENV_LOG) {
            self.log_filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.log_filter = val;
        }
        if let Ok(val) = std::env::var(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var(ENV_TIMEOUT_SECS) {
            match val.parse() {
                Ok(secs) => self.request_timeout_secs = Some(secs),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
    }

    /// Check values and normalize the base URL (no trailing slash).
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api_base_url must start with http:// or https:// (got '{}')",
                self.api_base_url
            )));
        }
        self.api_base_url = url.to_string();

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `<config_dir>/bookstock/config.toml`, if the platform has a config dir.
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookstock").join("config.toml"))
}

/// `<data_dir>/bookstock/bookstock.log`, falling back to the temp dir.
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("bookstock")
        .join("bookstock.log")
}
