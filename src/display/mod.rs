//! Display formatting for terminal output
//!
//! Provides tables and numbered listings for expenses, summaries and the
//! audit history.

pub mod audit;
pub mod expense;
pub mod summary;

pub use audit::format_audit_history;
pub use expense::{format_expense_line, format_expense_lines, format_expense_table, truncate};
pub use summary::format_summary_table;
