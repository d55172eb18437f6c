//! Expense service
//!
//! Provides business logic for the expense list: validated adds, positional
//! deletes, listing, summaries and exports. Every mutation is persisted
//! immediately and recorded in the audit log.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{self, ExportOutcome};
use crate::models::{today, Amount, Expense, NewExpense};
use crate::reports::ExpenseSummary;
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate input and append a new expense
    ///
    /// A blank date becomes today. The amount must parse as a number. On a
    /// validation error nothing changes; if saving fails the new expense is
    /// removed again before the error is returned.
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<Expense> {
        let date = resolve_date(&input.date);
        let amount =
            Amount::parse(&input.amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = Expense::new(date, input.category.trim(), amount, input.note.trim());

        self.storage.expenses.push(expense.clone());
        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.pop();
            warn!(error = %e, "failed to save new expense; change rolled back");
            return Err(e);
        }

        let position = self.storage.expenses.count();
        debug!(position, category = %expense.category, "added expense");
        self.storage
            .log_create(position, expense.to_string(), &expense);

        Ok(expense)
    }

    /// Delete the expense at a 1-based position
    ///
    /// Later expenses shift down by one. If saving fails the expense is put
    /// back at its position before the error is returned.
    pub fn delete(&mut self, position: usize) -> ExpenseResult<Expense> {
        let removed = self.storage.expenses.remove(position)?;

        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.insert(position, removed);
            warn!(error = %e, "failed to save after delete; change rolled back");
            return Err(e);
        }

        debug!(position, category = %removed.category, "deleted expense");
        self.storage
            .log_delete(position, removed.to_string(), &removed);

        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        self.storage.expenses.get_all()
    }

    /// Number of expenses
    pub fn count(&self) -> usize {
        self.storage.expenses.count()
    }

    /// Totals overall and per category, or `None` when there are no expenses
    pub fn summarize(&self) -> Option<ExpenseSummary> {
        ExpenseSummary::generate(self.list())
    }

    /// Export all expenses into `dir`
    pub fn export(&self, dir: &Path, include_spreadsheet: bool) -> ExpenseResult<ExportOutcome> {
        export::export_all(self.list(), dir, include_spreadsheet)
    }

    /// Export into the default `exports` directory
    pub fn export_default(&self, include_spreadsheet: bool) -> ExpenseResult<ExportOutcome> {
        let dir = self.storage.paths().exports_dir();
        self.export(&dir, include_spreadsheet)
    }
}

/// Trim a user-supplied date; blank means today, anything else is kept as typed
fn resolve_date(input: &str) -> String {
    match input.trim() {
        "" => today(),
        supplied => supplied.to_string(),
    }
}
