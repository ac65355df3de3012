//! Command-line argument parsing.

use std::path::PathBuf;

/// Flags that tweak how the dashboard starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// `--api-url <url>`: overrides config file and environment
    pub api_url: Option<String>,
    /// `--config <path>`: config file instead of the default location
    pub config_path: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    RunTui(RunOptions),
    /// A flag was missing its value
    Invalid(String),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use bookstock::cli::args::{parse_args, CliCommand, RunOptions};
///
/// let args = vec!["bookstock".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
///
/// let args = vec!["bookstock".to_string(), "--api-url".to_string(), "http://x".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::RunTui(RunOptions { api_url: Some("http://x".to_string()), config_path: None })
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => match args.next() {
                Some(url) => options.api_url = Some(url),
                None => return CliCommand::Invalid("--api-url requires a value".to_string()),
            },
            "--config" => match args.next() {
                Some(path) => options.config_path = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid("--config requires a value".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    options.api_url = Some(url.to_string());
                } else if let Some(path) = other.strip_prefix("--config=") {
                    options.config_path = Some(PathBuf::from(path));
                }
            }
        }
    }
    CliCommand::RunTui(options)
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "bookstock {}\n\
         Terminal inventory dashboard for a paginated book catalog.\n\n\
         USAGE:\n    bookstock [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --api-url <URL>    Catalog API base URL (env: BOOKSTOCK_API_URL)\n\
         \x20   --config <PATH>    Config file (default: <config dir>/bookstock/config.toml)\n\
         \x20   -h, --help         Print help\n\
         \x20   -V, --version      Print version\n",
        super::VERSION
    )
}
