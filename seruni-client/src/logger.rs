//! Logging Infrastructure
//!
//! Structured logging setup for binaries and demos built on the client.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info` level (overridable through `RUST_LOG`)
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional level, JSON output and daily-rolling
/// file output
///
/// `RUST_LOG` takes precedence over `log_level`. File output is only used
/// when `log_dir` exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let log_dir = log_dir.map(Path::new).filter(|p| p.exists());
    let _ = match (json, log_dir) {
        (true, Some(dir)) => subscriber
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, "seruni-client"))
            .try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(dir)) => subscriber
            .with_writer(tracing_appender::rolling::daily(dir, "seruni-client"))
            .with_ansi(false)
            .try_init(),
        (false, None) => subscriber.try_init(),
    };
}
