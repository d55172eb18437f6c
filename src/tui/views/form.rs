//! Expense entry form and button row
//!
//! Four text fields (Date, Category, Amount, Note) with Tab navigation, and
//! the four action buttons underneath.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::NewExpense;
use crate::tui::app::{App, Focus};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Amount,
    Note,
}

impl ExpenseField {
    /// All fields in display order
    pub const ALL: [ExpenseField; 4] = [Self::Date, Self::Category, Self::Amount, Self::Note];

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Note,
            Self::Note => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Note,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Note => Self::Amount,
        }
    }
}

/// Action buttons below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    AddExpense,
    DeleteSelected,
    Export,
    ShowSummary,
}

impl FormButton {
    /// All buttons in display order
    pub const ALL: [FormButton; 4] = [
        Self::AddExpense,
        Self::DeleteSelected,
        Self::Export,
        Self::ShowSummary,
    ];

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::DeleteSelected => "Delete Selected",
            Self::Export => "Export to CSV/Excel",
            Self::ShowSummary => "Show Summary",
        }
    }

    /// Keyboard shortcut shown next to the caption
    pub fn shortcut(self) -> &'static str {
        match self {
            Self::AddExpense => "^A",
            Self::DeleteSelected => "^D",
            Self::Export => "^E",
            Self::ShowSummary => "^S",
        }
    }

    /// Get the next button, or `None` after the last one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::AddExpense => Some(Self::DeleteSelected),
            Self::DeleteSelected => Some(Self::Export),
            Self::Export => Some(Self::ShowSummary),
            Self::ShowSummary => None,
        }
    }

    /// Get the previous button, or `None` before the first one
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::AddExpense => None,
            Self::DeleteSelected => Some(Self::AddExpense),
            Self::Export => Some(Self::DeleteSelected),
            Self::ShowSummary => Some(Self::Export),
        }
    }
}

/// State for the expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    /// Date input
    pub date_input: TextInput,
    /// Category input
    pub category_input: TextInput,
    /// Amount input
    pub amount_input: TextInput,
    /// Note input
    pub note_input: TextInput,
    /// Error message to display under the fields
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD (blank for today)"),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g., food, transport"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            note_input: TextInput::new().label("Note").placeholder("Optional note"),
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
    }

    /// Get the input for a field
    pub fn input(&self, field: ExpenseField) -> &TextInput {
        match field {
            ExpenseField::Date => &self.date_input,
            ExpenseField::Category => &self.category_input,
            ExpenseField::Amount => &self.amount_input,
            ExpenseField::Note => &self.note_input,
        }
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Date => &mut self.date_input,
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Note => &mut self.note_input,
        }
    }

    /// Raw input for the expense service
    pub fn to_new_expense(&self) -> NewExpense {
        NewExpense::new(
            self.date_input.value(),
            self.category_input.value(),
            self.amount_input.value(),
            self.note_input.value(),
        )
    }

    /// Empty every field and return focus to Date
    pub fn clear(&mut self) {
        self.date_input.clear();
        self.category_input.clear();
        self.amount_input.clear();
        self.note_input.clear();
        self.error_message = None;
        self.focused_field = ExpenseField::Date;
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the form fields
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form_focused = app.focus == Focus::Form;
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" New Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Note
            Constraint::Length(1), // Error
        ])
        .split(inner);

    for (field, chunk) in ExpenseField::ALL.iter().zip(chunks.iter()) {
        let focused = form_focused && app.form.focused_field == *field;
        let input = app.form.input(*field).clone().focused(focused);
        frame.render_widget(input, *chunk);
    }

    if let Some(ref error) = app.form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }
}

/// Render the button row
pub fn render_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (button, chunk) in FormButton::ALL.iter().zip(chunks.iter()) {
        let selected = app.focus == Focus::Buttons && app.selected_button == *button;
        let color = match button {
            FormButton::AddExpense => Color::Green,
            FormButton::DeleteSelected => Color::Red,
            _ => Color::White,
        };

        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        let caption = Line::from(vec![
            Span::styled(button.label(), style),
            Span::styled(
                format!(" {}", button.shortcut()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if selected { color } else { Color::DarkGray }));

        frame.render_widget(
            Paragraph::new(caption)
                .block(block)
                .alignment(ratatui::layout::Alignment::Center),
            *chunk,
        );
    }
}

/// Handle a key while a form field is focused
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.add_from_form();
            return;
        }
        KeyCode::Up => {
            app.form.prev_field();
            return;
        }
        KeyCode::Down => {
            app.form.next_field();
            return;
        }
        _ => {}
    }

    let input = app.form.focused_input();
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            input.insert(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return,
    }

    app.form.clear_error();
}
