//! Help dialog
//!
//! Shows keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Anywhere"),
        Line::from(""),
        key_line("Tab / Shift+Tab", "Move between fields, buttons and table"),
        key_line("Ctrl+A", "Add expense from the form"),
        key_line("Ctrl+D", "Delete the selected expense"),
        key_line("Ctrl+E", "Export to CSV/Excel"),
        key_line("Ctrl+S", "Show summary"),
        key_line("F1", "Show/hide help"),
        key_line("Esc / Ctrl+C", "Quit"),
        Line::from(""),
        section("Form"),
        Line::from(""),
        key_line("Enter", "Add expense"),
        key_line("Up/Down", "Previous/next field"),
        Line::from(""),
        section("Buttons"),
        Line::from(""),
        key_line("Left/Right", "Choose button"),
        key_line("Enter / Space", "Press button"),
        Line::from(""),
        section("Table"),
        Line::from(""),
        key_line("j/k, Up/Down", "Move selection"),
        key_line("d / Delete", "Delete the selected expense"),
        key_line("q", "Quit"),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(desc),
    ])
}
