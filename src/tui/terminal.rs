//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use tracing::info;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(storage: &mut Storage, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!("starting form window");

    let mut app = App::new(storage, settings);
    app.selected_index = app.expenses().len().saturating_sub(1);

    let events = EventHandler::default();
    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}
