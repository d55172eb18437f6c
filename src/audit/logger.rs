//! Audit logger for append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as one JSON line
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Check if the audit log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(1, Some("food".into()), &json!({"category": "food"}));

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].position, 1);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 1..=10 {
            let entry = AuditEntry::create(i, None, &json!({"index": i}));
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let positions: Vec<_> = recent.iter().map(|e| e.position).collect();
        assert_eq!(positions, [8, 9, 10]);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&AuditEntry::delete(2, None, &json!({})))
            .unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .unwrap()
            .write_all(b"\n\n")
            .unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(1, None, &json!({})))
            .unwrap();

        let logger2 = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(logger2.read_all().unwrap().len(), 1);
    }
}
