//! Custom logging module.
//!
//! This module provides a logger implementation for the `log` facade that
//! writes timestamped entries to stderr, keeping stdout free for command
//! output.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Mutex;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Map the number of `-v` flags to a level filter.
///
pub fn level_for_verbosity(occurrences: u64) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger writing formatted entries at or above a level to a sink.
///
pub struct CustomLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, sink: Box<dyn Write + Send>) -> Self {
        CustomLogger {
            level,
            sink: Mutex::new(sink),
        }
    }

    /// Install a stderr logger as the global logger.
    ///
    pub fn init(level: LevelFilter) -> Result<(), AppError> {
        let logger = CustomLogger::new(level, Box::new(std::io::stderr()));
        log::set_boxed_logger(Box::new(logger))
            .map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // A poisoned sink drops the entry
            if let Ok(mut sink) = self.sink.lock() {
                let _ = writeln!(sink, "{}", format_log(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}
