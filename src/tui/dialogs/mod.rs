//! Dialog modules for the TUI
//!
//! Contains modal dialogs shown over the main screen

pub mod help;
pub mod message;
pub mod open_export;
