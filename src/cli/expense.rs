//! Expense CLI commands
//!
//! One-shot commands over the expense list, for scripting and quick use.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary_table};
use crate::error::ExpenseResult;
use crate::export::ExportOutcome;
use crate::models::NewExpense;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (e.g., food, transport)
        category: String,
        /// Date, e.g. 2025-01-15; defaults to today
        #[arg(short, long, default_value = "")]
        date: String,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
    /// Delete an expense by its number in the list
    #[command(alias = "rm")]
    Delete {
        /// 1-based position shown by `list`
        position: usize,
    },
    /// Export expenses to CSV (and optionally a spreadsheet)
    Export {
        /// Also write report.xlsx
        #[arg(long)]
        xlsx: bool,
        /// Destination directory (defaults to <data dir>/exports)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show totals overall and by category
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();
    let mut service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let expense = service.add(NewExpense::new(date, category, amount, note))?;
            println!("Added expense #{}: {}", service.count(), expense);
        }

        ExpenseCommands::List => {
            println!("{}", format_expense_table(service.list(), currency));
        }

        ExpenseCommands::Delete { position } => {
            let removed = service.delete(position)?;
            println!("Removed: {}", removed);
        }

        ExpenseCommands::Export { xlsx, dir } => {
            let outcome = match dir {
                Some(dir) => service.export(&dir, xlsx)?,
                None => service.export_default(xlsx)?,
            };

            match outcome {
                ExportOutcome::NothingToExport => println!("No expenses to export."),
                ExportOutcome::Written { csv, spreadsheet } => {
                    println!("Exported to {}", csv.display());
                    if let Some(path) = spreadsheet {
                        println!("Exported to {}", path.display());
                    }
                }
            }
        }

        ExpenseCommands::Summary => match service.summarize() {
            None => println!("No expenses to summarize."),
            Some(summary) => println!("{}", format_summary_table(&summary, currency)),
        },
    }

    Ok(())
}
