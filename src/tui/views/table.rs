//! Expense table view
//!
//! Shows every expense in store order; the highlighted row is the target of
//! "Delete Selected".

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::{App, Focus};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };
    let expenses = app.expenses();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", expenses.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(18), // Category
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Note
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Note").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let currency = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let amount_style = if expense.amount.is_negative() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };

            Row::new(vec![
                Cell::from(expense.date.clone()),
                Cell::from(truncate(&expense.category, 18)),
                Cell::from(format!("{}{}", currency, expense.amount)).style(amount_style),
                Cell::from(truncate(&expense.note, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
