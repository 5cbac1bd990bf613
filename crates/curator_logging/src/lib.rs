#![deny(missing_docs)]
//! Shared logging utilities for the curator workspace.
//!
//! This crate provides the `curator_*` logging macros used by every crate,
//! the logger setup used by the terminal host, and a test initializer.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Default log file written by [`initialize`] when a file destination is requested.
pub const LOG_FILE: &str = "./curator.log";

/// `log::trace!` under the workspace prefix.
#[macro_export]
macro_rules! curator_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// `log::debug!` under the workspace prefix.
#[macro_export]
macro_rules! curator_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// `log::info!` under the workspace prefix.
#[macro_export]
macro_rules! curator_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// `log::warn!` under the workspace prefix.
#[macro_export]
macro_rules! curator_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// `log::error!` under the workspace prefix.
#[macro_export]
macro_rules! curator_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Where [`initialize`] sends records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to [`LOG_FILE`] in the current directory.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// File and terminal together.
    Both,
}

/// Initializes the global logger for the host application.
///
/// A file that cannot be created is reported on stderr and skipped; the
/// remaining destinations are still installed.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let log_config = record_config();
    let log_path = PathBuf::from(LOG_FILE);

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            log_config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        if let Some(writer) = open_log_file(&log_path, level, log_config) {
            loggers.push(writer);
        }
    }
    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

/// Terminal logger for tests; later calls in the same process are no-ops.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn record_config() -> Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_time_format_rfc3339()
        .build()
}

fn open_log_file(path: &Path, level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    File::create(path)
        .map(|file| WriteLogger::new(level, config, file))
        .map_err(|err| eprintln!("curator: log file {} unavailable: {err}", path.display()))
        .ok()
}
