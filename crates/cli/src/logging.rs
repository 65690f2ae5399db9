//! Logger setup for the `wvoov` binary.
//!
//! All log records go to stderr so they never mix with the report on stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install a terminal logger writing to stderr at `level`.
///
/// Does nothing if a logger is already installed.
pub fn initialize(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
