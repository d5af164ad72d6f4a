//! Log sink for the TUI.
//!
//! The terminal is in raw mode while the app runs, so records are kept in a
//! small in-memory ring and drawn by the log panel instead of printed.

use std::{collections::VecDeque, sync::Mutex};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept for the log panel.
const LOG_CAPACITY: usize = 128;

static LOGGER: TuiLogger = TuiLogger {
    lines: Mutex::new(VecDeque::new()),
};

struct TuiLogger {
    lines: Mutex<VecDeque<String>>,
}

impl Log for TuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == LOG_CAPACITY {
                lines.pop_front();
            }
            lines.push_back(format!("{:<5} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// The most recent `count` lines, oldest first.
pub fn recent(count: usize) -> Vec<String> {
    match LOGGER.lines.lock() {
        Ok(lines) => lines.iter().skip(lines.len().saturating_sub(count)).cloned().collect(),
        Err(_) => Vec::new(),
    }
}
