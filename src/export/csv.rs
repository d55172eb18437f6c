//! CSV Export functionality
//!
//! Writes expenses as `date,category,amount,note` rows with a header.

use std::io::Write;
use std::path::Path;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// File name of the CSV report inside the export directory
pub const CSV_FILE_NAME: &str = "report.csv";

/// Column order of the CSV report
pub const CSV_HEADER: [&str; 4] = ["date", "category", "amount", "note"];

/// Write expenses as CSV to any writer
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        let amount = expense.amount.to_string();
        csv_writer.write_record([
            expense.date.as_str(),
            expense.category.as_str(),
            amount.as_str(),
            expense.note.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write expenses to a CSV file, overwriting it
pub fn export_expenses_csv(expenses: &[Expense], path: &Path) -> ExpenseResult<()> {
    let file = std::fs::File::create(path)?;
    write_expenses_csv(expenses, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn test_header_and_rows_in_order() {
        let expenses = vec![
            Expense::new("2025-01-15", "food", Amount::from_units(10), "lunch"),
            Expense::new("2025-01-16", "transport", Amount::from_units(-3), ""),
        ];

        let mut buffer = Vec::new();
        write_expenses_csv(&expenses, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "date,category,amount,note",
                "2025-01-15,food,10,lunch",
                "2025-01-16,transport,-3,",
            ]
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let expenses = vec![Expense::new(
            "2025-01-15",
            "food",
            Amount::from_units(1),
            "bread, milk",
        )];

        let mut buffer = Vec::new();
        write_expenses_csv(&expenses, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"bread, milk\""));
    }

    #[test]
    fn test_csv_reads_back() {
        let expenses = vec![Expense::new("2025-01-15", "rent", Amount::from_units(500), "")];
        let mut buffer = Vec::new();
        write_expenses_csv(&expenses, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "rent");
        assert_eq!(&rows[0][2], "500");
    }
}
