//! Command-line interface.
//!
//! `main` parses flags first; only [`CliCommand::RunTui`] goes on to set up
//! the terminal.
//!
//! ```ignore
//! use bookstock::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::RunTui(options) => run(options),
//!     other => bookstock::cli::run_cli_command(other),
//! }
//! ```

pub mod args;

pub use args::{parse_args, usage, CliCommand, RunOptions};

/// Version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle commands that do not start the TUI.
///
/// Returns `None` for [`CliCommand::RunTui`]; otherwise the process exit
/// code to use after printing.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("bookstock {}", VERSION);
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, usage());
            Some(2)
        }
        CliCommand::RunTui(_) => None,
    }
}
