//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and an audit trail of
//! every change.

pub mod expenses;
pub mod file_io;

pub use expenses::{load_expenses, save_expenses, ExpenseRepository};
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;
use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn the audit trail off (or back on)
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save()
    }

    /// Record a created expense in the audit log
    pub fn log_create<T: Serialize>(&self, position: usize, summary: String, entity: &T) {
        self.write_audit(AuditEntry::create(position, Some(summary), entity));
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete<T: Serialize>(&self, position: usize, summary: String, entity: &T) {
        self.write_audit(AuditEntry::delete(position, Some(summary), entity));
    }

    // The data change has already been persisted; a failing audit write is
    // reported but does not undo it.
    fn write_audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("tracker");
        let paths = ExpensePaths::with_base_dir(base.clone());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(base.exists());
        assert!(storage.expenses.is_empty());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.set_audit_enabled(false);

        let expense = Expense::new("2025-01-01", "food", Amount::from_units(1), "");
        storage.log_create(1, expense.to_string(), &expense);

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
