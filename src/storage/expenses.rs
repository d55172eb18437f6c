//! Expense repository for JSON storage
//!
//! Holds the ordered list of expenses and mirrors it to expenses.json.
//! Order is insertion order; positions shown to users are 1-based.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Read the full list of expenses from `path`
///
/// A missing file is an empty list. A file that is not a JSON array of
/// expenses fails as a whole with [`ExpenseError::Parse`].
pub fn load_expenses(path: &Path) -> ExpenseResult<Vec<Expense>> {
    let expenses: Vec<Expense> = read_json(path)?;
    debug!(path = %path.display(), count = expenses.len(), "loaded expenses");
    Ok(expenses)
}

/// Overwrite `path` with the full list of expenses
pub fn save_expenses(path: &Path, expenses: &[Expense]) -> ExpenseResult<()> {
    write_json_atomic(path, expenses)?;
    debug!(path = %path.display(), count = expenses.len(), "saved expenses");
    Ok(())
}

/// Repository for expense persistence
#[derive(Debug)]
pub struct ExpenseRepository {
    path: PathBuf,
    data: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory list with the file contents
    ///
    /// On error the in-memory list is left untouched.
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.data = load_expenses(&self.path)?;
        Ok(())
    }

    /// Save the in-memory list to disk
    pub fn save(&self) -> ExpenseResult<()> {
        save_expenses(&self.path, &self.data)
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> &[Expense] {
        &self.data
    }

    /// Append an expense (not persisted until `save`)
    pub fn push(&mut self, expense: Expense) {
        self.data.push(expense);
    }

    /// Remove the last expense
    pub fn pop(&mut self) -> Option<Expense> {
        self.data.pop()
    }

    /// Insert an expense at a 1-based position
    pub fn insert(&mut self, position: usize, expense: Expense) {
        let index = position.saturating_sub(1).min(self.data.len());
        self.data.insert(index, expense);
    }

    /// Remove the expense at a 1-based position (not persisted until `save`)
    pub fn remove(&mut self, position: usize) -> ExpenseResult<Expense> {
        if position == 0 || position > self.data.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index: position,
                len: self.data.len(),
            });
        }
        Ok(self.data.remove(position - 1))
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no expenses
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
