//! Expense Tracker - record, review and export personal expenses
//!
//! This library provides the core functionality behind the `expenses`
//! binary: an ordered list of dated, categorized expenses persisted as a
//! JSON file, with summaries and CSV/Excel export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: The expense record and its decimal amount
//! - `storage`: JSON file storage layer
//! - `services`: Add, delete, list, summarize and export
//! - `reports`: Per-category totals
//! - `export`: CSV and spreadsheet writers
//! - `audit`: Add/delete history log
//! - `cli`: Subcommands and the numbered text menu
//! - `tui`: The form window
//! - `display`: Terminal tables
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::ExpensePaths;
//! use expense_tracker::models::NewExpense;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all()?;
//! let mut service = ExpenseService::new(&mut storage);
//! service.add(NewExpense::new("", "food", "12.50", "lunch"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
