//! Terminal User Interface module
//!
//! A single-window form for entering expenses, with buttons for delete,
//! export and summary, and a table of everything recorded so far.

pub mod app;
pub mod event;
pub mod handler;
pub mod opener;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
