//! Status bar view
//!
//! Shows the running total, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Amount;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let total: Amount = app.expenses().iter().map(|e| e.amount).sum();
    let currency = app.settings.currency_symbol.as_str();

    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            total.format_with_symbol(currency),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " Tab:Next  Esc:Quit  F1:Help ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
