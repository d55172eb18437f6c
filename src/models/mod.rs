//! Core data models for the expense tracker

pub mod amount;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use expense::{today, Expense, NewExpense, DATE_FORMAT};
