//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence and auditing of every change.

pub mod expense;

pub use expense::ExpenseService;
