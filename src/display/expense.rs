//! Expense display formatting
//!
//! Formats the expense list for terminal output, either as numbered lines
//! for the interactive menu or as a table for the `list` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

/// Table row for an expense
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format one expense as a numbered line: `1. date | ₹amount | category | note`
pub fn format_expense_line(position: usize, expense: &Expense, currency: &str) -> String {
    format!(
        "{}. {} | {}{} | {} | {}",
        position, expense.date, currency, expense.amount, expense.category, expense.note
    )
}

/// Format the expense list as numbered lines
pub fn format_expense_lines(expenses: &[Expense], currency: &str) -> String {
    let mut output = String::from("--- Your Expenses ---\n");
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format_expense_line(i + 1, expense, currency));
        output.push('\n');
    }
    output
}

/// Format the expense list as a table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        position: i + 1,
        date: e.date.clone(),
        amount: format!("{}{}", currency, e.amount),
        category: e.category.clone(),
        note: truncate(&e.note, 40),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Shorten text to at most `max_len` characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
