//! File logger behind the `log` facade
//!
//! The terminal owns stdout/stderr while the UI runs, so records go to
//! `~/.gamehub-tui/gamehub.log` instead. The level comes from the config and
//! can be overridden with `GAMEHUB_LOG`.

use crate::config::Config;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn format_line(record: &Record) -> String {
    format!(
        "[{}] [{:>5}] {}: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Parse a level name; unknown names yield `None`
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

fn resolve_level(config_level: &str) -> LevelFilter {
    std::env::var("GAMEHUB_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .or_else(|| parse_level(config_level))
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger. Logging stays disabled if the log file cannot
/// be opened; the UI does not depend on it.
pub fn init(config: &Config) {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("gamehub.log"))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    if log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))
    .is_err()
    {
        return;
    }
    let level = resolve_level(&config.log_level);
    log::set_max_level(level);
    log::info!("logger initialized at level {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" warning "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
