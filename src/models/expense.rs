//! Expense model
//!
//! One spending event: date, category, amount and an optional note.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// Canonical date format for expenses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
///
/// `date` is kept exactly as supplied (trimmed); only a blank date is
/// replaced, with today's date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Date of the expense, usually YYYY-MM-DD
    pub date: String,

    /// Free-text category label
    pub category: String,

    /// Amount spent
    pub amount: Amount,

    /// Optional note
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            note: note.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.date, self.amount, self.category)?;
        if !self.note.is_empty() {
            write!(f, " | {}", self.note)?;
        }
        Ok(())
    }
}

/// Raw user input for a new expense, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewExpense {
    /// Date text; blank means today
    pub date: String,
    /// Category text
    pub category: String,
    /// Amount text, must parse as a number
    pub amount: String,
    /// Note text
    pub note: String,
}

impl NewExpense {
    /// Create input from the four user-facing fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            note: note.into(),
        }
    }
}

/// Today's date in canonical form
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serialize_all_fields() {
        let expense = Expense::new("2025-01-15", "food", Amount::from_units(10), "");
        let value = serde_json::to_value(&expense).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["date"], "2025-01-15");
        assert_eq!(obj["category"], "food");
        assert_eq!(obj["note"], "");
        assert!(obj["amount"].is_number());
    }

    #[test]
    fn test_missing_note_defaults_to_empty() {
        let json = r#"{"date": "2025-01-15", "category": "food", "amount": 12.5}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.note, "");
    }

    #[test]
    fn test_missing_amount_is_rejected() {
        let json = r#"{"date": "2025-01-15", "category": "food", "note": ""}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn test_non_canonical_date_is_kept() {
        let json = r#"{"date": "25-01-15", "category": "food", "amount": 1, "note": ""}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.date, "25-01-15");
    }

    #[test]
    fn test_today_is_canonical() {
        let date = today();
        assert!(NaiveDate::parse_from_str(&date, DATE_FORMAT).is_ok());
    }
}
