//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog, the global shortcuts, or
//! the focused part of the screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;
use super::views::form::{self, FormButton};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports key releases as well
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    if handle_global_key(app, key) {
        return Ok(());
    }

    match app.focus {
        Focus::Form => form::handle_key(app, key),
        Focus::Buttons => handle_buttons_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Notification(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        ActiveDialog::ConfirmOpen(path) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let path = path.clone();
                app.open_file(path);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
    }
}

/// Keys that work regardless of focus. Returns true if handled.
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('q') if ctrl => app.quit(),
        KeyCode::Char('a') if ctrl => app.press(FormButton::AddExpense),
        KeyCode::Char('d') if ctrl => app.press(FormButton::DeleteSelected),
        KeyCode::Char('e') if ctrl => app.press(FormButton::Export),
        KeyCode::Char('s') if ctrl => app.press(FormButton::ShowSummary),
        _ => return false,
    }

    true
}

/// Handle keys while the button row is focused
fn handle_buttons_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            if let Some(button) = app.selected_button.prev() {
                app.selected_button = button;
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some(button) = app.selected_button.next() {
                app.selected_button = button;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.press(app.selected_button),
        _ => {}
    }
}

/// Handle keys while the expense table is focused
fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Home | KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.selected_index = app.expenses().len().saturating_sub(1);
        }
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
