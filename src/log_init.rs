//! File logger used by the demos.
//!
//! The path and level come from `CSSB_LOG` and `CSSB_LOG_LEVEL`; see
//! [`init_from_env`].

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;

pub const LOG_PATH_VAR: &str = "CSSB_LOG";
pub const LOG_LEVEL_VAR: &str = "CSSB_LOG_LEVEL";

struct FileLogger {
    file_path: String,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(file, "[{}] {}", record.level(), record.args());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs a logger appending `[LEVEL] message` lines to `path`.
///
/// Fails if a logger has already been installed in this process.
pub fn init_logger(path: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        file_path: path.to_string(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

/// Installs the file logger when `CSSB_LOG` is set.
///
/// Returns `Ok(false)` when logging is not configured. An unknown
/// `CSSB_LOG_LEVEL` falls back to `debug`.
pub fn init_from_env() -> Result<bool, SetLoggerError> {
    let Ok(path) = std::env::var(LOG_PATH_VAR) else {
        return Ok(false);
    };
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .as_deref()
        .map(parse_level)
        .unwrap_or(LevelFilter::Debug);
    init_logger(&path, level)?;
    Ok(true)
}

fn parse_level(value: &str) -> LevelFilter {
    value.parse().unwrap_or(LevelFilter::Debug)
}
