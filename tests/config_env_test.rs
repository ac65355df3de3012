//! Configuration loading from files and the environment.
//!
//! Environment variables are process-global, so every test that touches
//! them runs serially.

use std::io::Write;

use bookstock::config::{
    AppConfig, DEFAULT_API_BASE_URL, ENV_API_URL, ENV_LOG, ENV_LOG_FILE, ENV_TIMEOUT_SECS,
};
use bookstock::error::ConfigError;
use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};

fn clear_env() {
    for key in [ENV_API_URL, ENV_LOG, ENV_LOG_FILE, ENV_TIMEOUT_SECS, "RUST_LOG"] {
        std::env::remove_var(key);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_missing_file_gives_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();

    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.request_timeout_secs, None);
}

#[test]
#[serial]
fn test_file_values_are_read() {
    clear_env();
    let file = config_file(
        r#"
api_base_url = "https://books.example.com/api/"
request_timeout_secs = 15
log_filter = "bookstock=debug"
"#,
    );
    let config = AppConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.api_base_url, "https://books.example.com/api");
    assert_eq!(config.request_timeout_secs, Some(15));
    assert_eq!(config.log_filter, "bookstock=debug");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file(r#"api_base_url = "http://from-file:3000""#);
    std::env::set_var(ENV_API_URL, "http://from-env:4000");
    std::env::set_var(ENV_TIMEOUT_SECS, "7");
    std::env::set_var("RUST_LOG", "warn");

    let config = AppConfig::load(Some(file.path())).unwrap();
    clear_env();

    assert_eq!(config.api_base_url, "http://from-env:4000");
    assert_eq!(config.request_timeout_secs, Some(7));
    assert_eq!(config.log_filter, "warn");
}

#[test]
#[serial]
fn test_invalid_url_is_rejected() {
    clear_env();
    std::env::set_var(ENV_API_URL, "ftp://books");
    let dir = TempDir::new().unwrap();

    let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
    clear_env();

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
#[serial]
fn test_malformed_file_is_a_parse_error() {
    clear_env();
    let file = config_file("api_base_url = [not a string");

    let result = AppConfig::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
#[serial]
fn test_log_file_from_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("logs").join("bookstock.log");
    std::env::set_var(ENV_LOG_FILE, &log_path);

    let config = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
    clear_env();

    assert_eq!(config.log_file, log_path);
}

#[test]
#[serial]
fn test_cli_url_replaces_invalid_env_url() {
    clear_env();
    std::env::set_var(ENV_API_URL, "localhost:3000");
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let from_env_only = AppConfig::load(Some(&path));
    let with_cli = AppConfig::load_with_overrides(Some(&path), Some("http://books.example.com/"));
    clear_env();

    assert!(matches!(from_env_only, Err(ConfigError::Validation(_))));
    assert_eq!(with_cli.unwrap().api_base_url, "http://books.example.com");
}

#[test]
#[serial]
fn test_cli_url_replaces_invalid_file_url() {
    clear_env();
    let file = config_file(r#"api_base_url = "books.local""#);

    let config = AppConfig::load_with_overrides(Some(file.path()), Some("https://books.local")).unwrap();

    assert_eq!(config.api_base_url, "https://books.local");
}

#[test]
#[serial]
fn test_invalid_cli_url_is_rejected() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let result = AppConfig::load_with_overrides(Some(&dir.path().join("absent.toml")), Some("books"));

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}
