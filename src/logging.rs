//! Tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file. Fetch failures are only
//! ever reported here and in the footer.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_file`.
///
/// Invalid filter directives fall back to `info`. Returns an error only if
/// the file cannot be opened; a subscriber that is already installed (tests)
/// is left alone.
pub fn init(log_file: &Path, filter: &str) -> std::io::Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_file.display(),
        "logging initialized"
    );
    Ok(())
}

/// Parse `filter`, falling back to `info` when it is not a valid directive.
pub fn build_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
}
