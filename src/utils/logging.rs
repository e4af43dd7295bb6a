//! Logging utilities
//!
//! Provides logging setup and command logging.

use env_logger::Env;
use log::info;

/// Setup logging for the shell.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn setup_logging(default_filter: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Log a received shell command
pub fn log_command(source: &str, command: &str) {
    info!("{} executed: {}", source, command);
}
