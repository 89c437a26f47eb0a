//! File logging for the CLI and TUI.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::AppConfig;

const LOG_FILE_NAME: &str = "hueloom.log";

/// Install the global subscriber writing to `config.log_path()` at `config.logging.level`.
///
/// Keep the returned guard alive until exit; dropping it flushes pending lines.
/// Nothing is written to the terminal, which belongs to the TUI while it runs.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let log_path = config.log_path();
    let dir = log_path.parent().unwrap_or(Path::new("."));
    let file_name = log_path.file_name().unwrap_or(OsStr::new(LOG_FILE_NAME));

    // The appender reports its own error if the directory is unusable
    let _ = std::fs::create_dir_all(dir);

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    // Span enter/close events are debug-build only
    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(level_filter(&config.logging.level))
        .with(file_layer)
        .init();

    guard
}

/// Filter for this crate's events at `level`, falling back to `info` when unparseable.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("hueloom={}", level.trim().to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("hueloom=info"))
}
