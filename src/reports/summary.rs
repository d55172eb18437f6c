//! Expense Summary
//!
//! Totals all expenses and breaks them down by category.

use std::collections::HashMap;

use crate::models::{Amount, Expense};

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label, as entered
    pub category: String,
    /// Sum of amounts in this category
    pub total: Amount,
    /// Number of expenses in this category
    pub count: usize,
}

/// Summary of all expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    /// Sum of every amount
    pub total: Amount,
    /// Number of expenses summarized
    pub count: usize,
    /// Per-category totals in the order each category first appears
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    /// Summarize a list of expenses
    ///
    /// Returns `None` for an empty list, which is "nothing to summarize"
    /// rather than a zero total.
    pub fn generate(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut total = Amount::zero();

        for expense in expenses {
            total += expense.amount;

            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                by_category.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Amount::zero(),
                    count: 0,
                });
                by_category.len() - 1
            });

            let entry = &mut by_category[slot];
            entry.total += expense.amount;
            entry.count += 1;
        }

        Some(Self {
            total,
            count: expenses.len(),
            by_category,
        })
    }

    /// Total for a single category, if it appears
    pub fn category_total(&self, category: &str) -> Option<Amount> {
        self.by_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total.format_with_symbol(currency)
        ));
        output.push_str("By Category:\n");

        for category in &self.by_category {
            output.push_str(&format!(
                "  {}: {}\n",
                category.category,
                category.total.format_with_symbol(currency)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn expense(category: &str, amount: &str) -> Expense {
        Expense::new(
            "2025-01-15",
            category,
            Amount::from_decimal(rust_decimal::Decimal::from_str(amount).unwrap()),
            "",
        )
    }

    #[test]
    fn test_empty_is_none() {
        assert!(ExpenseSummary::generate(&[]).is_none());
    }

    #[test]
    fn test_totals_in_first_seen_order() {
        let expenses = vec![
            expense("food", "10"),
            expense("food", "5"),
            expense("transport", "3"),
        ];

        let summary = ExpenseSummary::generate(&expenses).unwrap();

        assert_eq!(summary.total, Amount::from_units(18));
        assert_eq!(summary.count, 3);
        let categories: Vec<_> = summary
            .by_category
            .iter()
            .map(|c| (c.category.as_str(), c.total, c.count))
            .collect();
        assert_eq!(
            categories,
            [
                ("food", Amount::from_units(15), 2),
                ("transport", Amount::from_units(3), 1)
            ]
        );
    }

    #[test]
    fn test_order_follows_first_appearance() {
        let expenses = vec![
            expense("rent", "100"),
            expense("food", "1"),
            expense("rent", "50"),
            expense("books", "2"),
        ];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        let names: Vec<_> = summary.by_category.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["rent", "food", "books"]);
        assert_eq!(summary.category_total("rent"), Some(Amount::from_units(150)));
        assert_eq!(summary.category_total("travel"), None);
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let expenses = vec![expense("misc", "0.1"), expense("misc", "0.2")];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        assert_eq!(
            summary.total,
            Amount::from_decimal(rust_decimal::Decimal::from_str("0.3").unwrap())
        );
    }

    #[test]
    fn test_negative_amounts_net_out() {
        let expenses = vec![expense("food", "10"), expense("food", "-10")];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        assert!(summary.total.is_zero());
        assert_eq!(summary.by_category.len(), 1);
    }

    #[test]
    fn test_categories_are_case_sensitive() {
        let expenses = vec![expense("Food", "1"), expense("food", "2")];

        let summary = ExpenseSummary::generate(&expenses).unwrap();
        assert_eq!(summary.by_category.len(), 2);
    }

    #[test]
    fn test_format_terminal() {
        let expenses = vec![expense("food", "10"), expense("transport", "3.5")];

        let output = ExpenseSummary::generate(&expenses)
            .unwrap()
            .format_terminal("₹");

        assert!(output.contains("Total Expenses: ₹13.50"));
        assert!(output.contains("  food: ₹10.00"));
        assert!(output.contains("  transport: ₹3.50"));
    }
}
