//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events,
//! and runs the button actions against the expense service.

use std::path::PathBuf;

use tracing::warn;

use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::export::ExportOutcome;
use crate::models::Expense;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::opener;
use super::views::form::{ExpenseField, ExpenseFormState, FormButton};
use super::widgets::Notification;

/// Which part of the screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    Buttons,
    Table,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Notification(Notification),
    /// Ask whether to open the exported spreadsheet
    ConfirmOpen(PathBuf),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a mut Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which part of the screen is focused
    pub focus: Focus,

    /// Entry form state
    pub form: ExpenseFormState,

    /// Highlighted button when the button row is focused
    pub selected_button: FormButton,

    /// Selected row in the expense table (0-based)
    pub selected_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            focus: Focus::default(),
            form: ExpenseFormState::new(),
            selected_button: FormButton::default(),
            selected_index: 0,
            active_dialog: ActiveDialog::default(),
            status_message: None,
        }
    }

    /// All expenses in store order
    pub fn expenses(&self) -> &[Expense] {
        self.storage.expenses.get_all()
    }

    fn service(&mut self) -> ExpenseService<'_> {
        ExpenseService::new(&mut *self.storage)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Show a notification box
    pub fn notify(&mut self, notification: Notification) {
        self.active_dialog = ActiveDialog::Notification(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move focus forward: fields, then buttons, then the table
    pub fn focus_next(&mut self) {
        match self.focus {
            Focus::Form if self.form.focused_field == ExpenseField::Note => {
                self.focus = Focus::Buttons;
                self.selected_button = FormButton::AddExpense;
            }
            Focus::Form => self.form.next_field(),
            Focus::Buttons => match self.selected_button.next() {
                Some(button) => self.selected_button = button,
                None => self.focus = Focus::Table,
            },
            Focus::Table => {
                self.focus = Focus::Form;
                self.form.set_focus(ExpenseField::Date);
            }
        }
    }

    /// Move focus backward
    pub fn focus_prev(&mut self) {
        match self.focus {
            Focus::Form if self.form.focused_field == ExpenseField::Date => {
                self.focus = Focus::Table;
            }
            Focus::Form => self.form.prev_field(),
            Focus::Buttons => match self.selected_button.prev() {
                Some(button) => self.selected_button = button,
                None => {
                    self.focus = Focus::Form;
                    self.form.set_focus(ExpenseField::Note);
                }
            },
            Focus::Table => {
                self.focus = Focus::Buttons;
                self.selected_button = FormButton::ShowSummary;
            }
        }
    }

    /// Move table selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move table selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expenses().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the table
    fn clamp_selection(&mut self) {
        let len = self.expenses().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Run the action behind a button
    pub fn press(&mut self, button: FormButton) {
        match button {
            FormButton::AddExpense => self.add_from_form(),
            FormButton::DeleteSelected => self.delete_selected(),
            FormButton::Export => self.export(),
            FormButton::ShowSummary => self.show_summary(),
        }
    }

    /// Add an expense from the form fields
    pub fn add_from_form(&mut self) {
        let input = self.form.to_new_expense();

        let result = self.service().add(input);
        match result {
            Ok(expense) => {
                self.form.clear();
                self.selected_index = self.expenses().len().saturating_sub(1);
                self.set_status(format!("Added: {}", expense));
                self.notify(Notification::success("Expense added!"));
            }
            Err(ExpenseError::Validation(msg)) => {
                self.form.set_error(msg.clone());
                self.notify(Notification::error(msg));
            }
            Err(e) => {
                warn!(error = %e, "failed to add expense");
                self.notify(Notification::error(format!("Failed to save: {}", e)));
            }
        }
    }

    /// Delete the highlighted table row
    pub fn delete_selected(&mut self) {
        if self.expenses().is_empty() {
            self.notify(Notification::warning("Select an expense to delete."));
            return;
        }

        let position = self.selected_index + 1;
        let result = self.service().delete(position);
        match result {
            Ok(removed) => {
                self.clamp_selection();
                self.set_status(format!("Deleted: {}", removed));
            }
            Err(e) => {
                warn!(error = %e, position, "failed to delete expense");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    /// Export to the default directory, with a spreadsheet if configured
    pub fn export(&mut self) {
        let include_spreadsheet = self.settings.export_spreadsheet;

        let result = self.service().export_default(include_spreadsheet);
        match result {
            Ok(ExportOutcome::NothingToExport) => {
                self.notify(Notification::info("No expenses to export."));
            }
            Ok(ExportOutcome::Written {
                csv,
                spreadsheet: Some(xlsx),
            }) => {
                self.set_status(format!("Exported to {}", csv.display()));
                self.open_dialog(ActiveDialog::ConfirmOpen(xlsx));
            }
            Ok(ExportOutcome::Written {
                csv,
                spreadsheet: None,
            }) => {
                self.notify(Notification::success(format!(
                    "Exported to {}",
                    csv.display()
                )));
            }
            Err(e) => {
                self.notify(Notification::error(format!("Failed to export: {}", e)));
            }
        }
    }

    /// Show totals in a message box
    pub fn show_summary(&mut self) {
        let currency = self.settings.currency_symbol.clone();
        let summary = self.service().summarize();
        let notification = match summary {
            None => Notification::info("No expenses to summarize."),
            Some(summary) => Notification::info(summary.format_terminal(&currency)),
        };
        self.notify(notification.with_title("Summary"));
    }

    /// Open an exported file in the platform's default application
    pub fn open_file(&mut self, path: PathBuf) {
        self.close_dialog();
        if let Err(e) = opener::open_path(&path) {
            warn!(error = %e, path = %path.display(), "failed to open file");
            self.notify(Notification::error(format!("Could not open file:\n{}", e)));
        }
    }
}
