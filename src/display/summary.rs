//! Summary display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::ExpenseSummary;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format a summary as a per-category table followed by the grand total
pub fn format_summary_table(summary: &ExpenseSummary, currency: &str) -> String {
    let rows = summary.by_category.iter().map(|c| CategoryRow {
        category: c.category.clone(),
        count: c.count,
        total: c.total.format_with_symbol(currency),
    });

    let table = Table::new(rows).with(Style::rounded()).to_string();

    format!(
        "{}\nTotal Spent: {} ({} expenses)",
        table,
        summary.total.format_with_symbol(currency),
        summary.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};

    #[test]
    fn test_summary_table() {
        let expenses = vec![
            Expense::new("2025-01-15", "food", Amount::from_units(10), ""),
            Expense::new("2025-01-16", "food", Amount::from_units(5), ""),
            Expense::new("2025-01-16", "transport", Amount::from_units(3), ""),
        ];
        let summary = ExpenseSummary::generate(&expenses).unwrap();

        let output = format_summary_table(&summary, "₹");

        assert!(output.contains("food"));
        assert!(output.contains("₹15.00"));
        assert!(output.contains("Total Spent: ₹18.00 (3 expenses)"));
        let food = output.find("food").unwrap();
        let transport = output.find("transport").unwrap();
        assert!(food < transport);
    }
}
