//! Library half of the `qlingua` command-line tool.
//!
//! The binary in `main.rs` only parses arguments and installs logging; the
//! commands, the circuit formats and the configuration layer live here so
//! they can be tested directly.

pub mod commands;
pub mod config;
pub mod format;

pub use config::{CliConfig, ConfigError};
pub use format::{AnyCircuit, Format};

/// Log filter for a `-v` count, falling back to the configured level.
pub fn log_filter(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
