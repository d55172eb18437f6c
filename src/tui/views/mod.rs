//! TUI Views module
//!
//! Contains the form, the expense table and the status bar, plus dialog
//! dispatch.

pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    form::render_buttons(frame, app, layout.buttons);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Notification(notification) => {
            dialogs::message::render(frame, notification)
        }
        ActiveDialog::ConfirmOpen(path) => dialogs::open_export::render(frame, path),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::config::settings::Settings;
    use crate::storage::Storage;
    use crate::tui::widgets::Notification;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::TempDir;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_form_and_table() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        app.form.category_input = crate::tui::widgets::TextInput::new().content("food");
        app.form.amount_input = crate::tui::widgets::TextInput::new().content("10");
        app.add_from_form();
        app.close_dialog();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("New Expense"));
        assert!(text.contains("Add Expense"));
        assert!(text.contains("Delete Selected"));
        assert!(text.contains("Export to CSV/Excel"));
        assert!(text.contains("Show Summary"));
        assert!(text.contains("Expenses (1)"));
        assert!(text.contains("food"));
    }

    #[test]
    fn test_render_notification_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        app.notify(Notification::info("No expenses to summarize.").with_title("Summary"));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No expenses to summarize."));
    }

    #[test]
    fn test_render_open_export_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);
        app.open_dialog(ActiveDialog::ConfirmOpen("exports/report.xlsx".into()));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Export Complete"));
        assert!(text.contains("Saved report.csv and report.xlsx to"));
        assert!(text.contains("Open the spreadsheet now?"));
    }
}
