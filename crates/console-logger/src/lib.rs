//! Console Logger
//!
//! `log` backend for the browser console. The most recent lines are kept in
//! a circular buffer so they can be inspected or attached to bug reports.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger.
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first.
    pub fn recent(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(recent) => recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut recent) = self.recent.lock() {
            if recent.len() == self.capacity {
                recent.pop_front();
            }
            recent.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "{}{:<5} {}: {}",
        timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn timestamp() -> String {
    let now = js_sys::Date::new_0();
    format!("[{}] ", String::from(now.to_iso_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Install the global logger. Calling it again is an error, as with any
/// `log` backend.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines buffered by the global logger; empty before [`init`].
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("menu")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn keeps_only_the_newest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        record(&logger, Level::Info, "one");
        record(&logger, Level::Info, "two");
        record(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("menu: two"));
        assert!(lines[1].ends_with("menu: three"));
    }

    #[test]
    fn filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        record(&logger, Level::Debug, "noise");
        record(&logger, Level::Warn, "delete failed");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("delete failed"));
    }

    #[test]
    fn zero_capacity_buffers_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        record(&logger, Level::Error, "boom");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn global_logger_exposes_recent_lines() {
        assert!(recent_lines().is_empty());
        init(LevelFilter::Info).unwrap();
        log::info!("category 10 removed");
        log::debug!("filtered out");

        let lines = recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("category 10 removed"));
    }
}
