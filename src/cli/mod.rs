//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod history;
pub mod menu;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::handle_history_command;
pub use menu::MenuShell;
