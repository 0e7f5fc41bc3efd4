//! Logging setup for the dashboard.
//!
//! The TUI owns the terminal, so logs go to a file only. Tail it with
//! `tail -f logs/atmodash.log` while the app runs. Verbosity comes from
//! `RUST_LOG`, defaulting to `info`.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

const LOG_FILE: &str = "atmodash.log";

/// Keeps the non-blocking writer alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize file logging.
///
/// Creates the log directory if needed and truncates the previous log so
/// each session starts clean.
pub fn init_logging(log_dir: &str) -> io::Result<LoggingGuard> {
    fs::create_dir_all(log_dir)?;

    let log_path = Path::new(log_dir).join(LOG_FILE);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
