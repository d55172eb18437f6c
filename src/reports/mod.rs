//! Reports module for the expense tracker
//!
//! Provides the overall and per-category expense summary.

pub mod summary;

pub use summary::{CategoryTotal, ExpenseSummary};
