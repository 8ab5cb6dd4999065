//! Diagnostic logging for marquee
//!
//! Failures in the TUI surface as a one-line notice; the detail lands here.
//! Entries are written to `marquee.log` next to the executable, tagged with
//! the component that produced them.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global logger instance
static LOGGER: OnceLock<Mutex<MarqueeLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Main logger struct
pub struct MarqueeLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl MarqueeLogger {
    fn new() -> Self {
        let log_path = Self::log_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(&log_path)
            .ok();

        Self {
            file,
            min_level: LogLevel::Debug,
        }
    }

    /// Log file path (same directory as the executable)
    fn log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marquee.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        let entry = format!("[{}] [{:5}] [{}] {}\n", timestamp, level, module, message);

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger
pub fn init() {
    let _ = LOGGER.set(Mutex::new(MarqueeLogger::new()));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.lock().log(level, module, message);
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Specialized logging functions for the suggestion request lifecycle
// ============================================================================

/// Log a dispatched suggestion request
pub fn log_fetch_dispatch(seq: u64, query: &str) {
    let msg = format!("Dispatch #{}: query='{}'", seq, query);
    info("FETCH", &msg);
}

/// Log a completed suggestion response
pub fn log_fetch_response(seq: u64, count: usize, elapsed_ms: u128) {
    let msg = format!("Response #{}: {} suggestions in {}ms", seq, count, elapsed_ms);
    info("FETCH", &msg);
}

/// Log a failed suggestion request
pub fn log_fetch_error(seq: u64, detail: &str) {
    let msg = format!("Request #{} failed: {}", seq, detail);
    error("FETCH", &msg);
}

/// Log a response discarded because a newer request superseded it
pub fn log_stale_drop(seq: u64, latest: u64) {
    let msg = format!("Dropped stale response #{} (latest is #{})", seq, latest);
    debug("FETCH", &msg);
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        let mut l = logger.lock();
        if let Some(ref mut file) = l.file {
            let _ = file.flush();
        }
    }
}
