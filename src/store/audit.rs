//! Internal operation log: one JSON line per state-changing command,
//! appended to <data_dir>/fleetrepair.log.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Append one log line. Logging must never break the command that is being
/// logged, so failures only produce a warning.
pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = try_record(cfg, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

fn try_record(cfg: &Config, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let line = serde_json::to_string(&entry).map_err(|e| AppError::Other(e.to_string()))?;

    fs::create_dir_all(cfg.data_dir_path())?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(cfg.log_file())?;
    writeln!(file, "{line}")?;

    Ok(())
}

/// Load all log entries, oldest first. Unparseable lines are skipped.
pub fn load(cfg: &Config) -> AppResult<Vec<LogEntry>> {
    let path = cfg.log_file();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    let entries = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<LogEntry>(l).ok())
        .collect();

    Ok(entries)
}
