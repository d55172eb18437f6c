//! Path management for the expense tracker
//!
//! Everything lives under a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command-line flag (passed in by the binary)
//! 2. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Name of the backing file holding all expenses
pub const EXPENSES_FILE_NAME: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Uses `EXPENSE_TRACKER_DIR` when set, otherwise the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }

    /// Get the default export directory (`exports/`)
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}
