//! Trace logging for the CLI.
//!
//! Stdout carries decoded text, so events only ever go to a JSON-lines file.

use crate::config::AppConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Where trace events are appended: `--trace-log`, else a file in the temp dir.
pub fn tracing_log_path(config: &AppConfig) -> PathBuf {
    config
        .trace_log
        .clone()
        .unwrap_or_else(|| env::temp_dir().join("hexutf8_trace.jsonl"))
}

/// Install the JSON trace subscriber once, if the CLI asked for logs.
///
/// Returns the file events are written to, or `None` when logging is off or the
/// file could not be opened. Per-sequence classification is logged at TRACE.
pub fn init_tracing(config: &AppConfig) -> Option<PathBuf> {
    if !config.logging_enabled() {
        return None;
    }

    TRACING_INIT
        .get_or_init(|| {
            let path = tracing_log_path(config);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()?;
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_max_level(Level::TRACE)
                .with_timer(UtcTime::rfc_3339())
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok()?;
            Some(path)
        })
        .clone()
}
