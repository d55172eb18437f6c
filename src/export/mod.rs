//! Export module for the expense tracker
//!
//! Writes the expense list as tabular files:
//! - CSV: `report.csv` with a `date,category,amount,note` header
//! - XLSX: `report.xlsx` with an `Expenses` worksheet (optional)

pub mod csv;
pub mod xlsx;

pub use self::csv::{export_expenses_csv, write_expenses_csv, CSV_FILE_NAME, CSV_HEADER};
pub use self::xlsx::{export_expenses_xlsx, SHEET_NAME, XLSX_FILE_NAME, XLSX_HEADER};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// There were no expenses; no file was written
    NothingToExport,
    /// Files were written
    Written {
        /// Path of the CSV report
        csv: PathBuf,
        /// Path of the spreadsheet report, if one was requested
        spreadsheet: Option<PathBuf>,
    },
}

/// Export expenses into `dir`, creating it if needed
///
/// An empty list writes nothing. The CSV report is always written; the
/// spreadsheet only when `include_spreadsheet` is set.
pub fn export_all(
    expenses: &[Expense],
    dir: &Path,
    include_spreadsheet: bool,
) -> ExpenseResult<ExportOutcome> {
    if expenses.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    std::fs::create_dir_all(dir).map_err(|e| {
        ExpenseError::Io(format!(
            "Failed to create export directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let csv_path = dir.join(CSV_FILE_NAME);
    export_expenses_csv(expenses, &csv_path)?;
    info!(path = %csv_path.display(), rows = expenses.len(), "exported csv");

    let spreadsheet = if include_spreadsheet {
        let xlsx_path = dir.join(XLSX_FILE_NAME);
        export_expenses_xlsx(expenses, &xlsx_path)?;
        info!(path = %xlsx_path.display(), rows = expenses.len(), "exported spreadsheet");
        Some(xlsx_path)
    } else {
        None
    };

    Ok(ExportOutcome::Written {
        csv: csv_path,
        spreadsheet,
    })
}
