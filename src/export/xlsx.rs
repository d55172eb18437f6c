//! Spreadsheet Export functionality
//!
//! Writes expenses to an `.xlsx` workbook with a single `Expenses` sheet.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExpenseResult;
use crate::models::Expense;

/// File name of the spreadsheet report inside the export directory
pub const XLSX_FILE_NAME: &str = "report.xlsx";

/// Name of the worksheet holding the expenses
pub const SHEET_NAME: &str = "Expenses";

/// Header row of the spreadsheet
pub const XLSX_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Note"];

/// Write expenses to a spreadsheet file, overwriting it
///
/// Amounts are written as number cells so they can be summed in the
/// spreadsheet application.
pub fn export_expenses_xlsx(expenses: &[Expense], path: &Path) -> ExpenseResult<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in XLSX_HEADER.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, expense) in expenses.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &expense.date)?;
        worksheet.write_string(row, 1, &expense.category)?;
        worksheet.write_number(row, 2, expense.amount.to_f64())?;
        worksheet.write_string(row, 3, &expense.note)?;
    }

    worksheet.set_column_width(0, 12)?;
    worksheet.set_column_width(1, 16)?;
    worksheet.set_column_width(3, 30)?;

    workbook.save(path)?;
    Ok(())
}
