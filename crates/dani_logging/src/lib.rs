#![deny(missing_docs)]
//! Shared logging utilities for the harvester workspace.
//!
//! Library crates log through the `dani_*` macros below and never pick a
//! backend; the binary installs `simplelog` loggers at startup.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! dani_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! dani_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! dani_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! dani_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! dani_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Routes log output of tests to the terminal.
///
/// Debug builds log at debug level, release builds at info. Safe to call from
/// every test: only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
