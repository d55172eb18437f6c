//! Interactive numbered menu
//!
//! A line-oriented loop over the expense service. Reads one line per prompt
//! and writes plain text, so it works over pipes as well as a terminal.
//! End of input exits the same way as choosing "Exit".

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::format_expense_lines;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::ExportOutcome;
use crate::models::{Amount, NewExpense};
use crate::services::ExpenseService;
use crate::storage::Storage;

const MENU: &str = "\n=== PERSONAL EXPENSE TRACKER ===
1. Add Expense
2. View Expenses
3. Delete Expense
4. Export to CSV
5. Show Summary
6. Exit";

/// Whether the loop keeps going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The numbered-menu front end
pub struct MenuShell<'a, R, W> {
    service: ExpenseService<'a>,
    currency: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuShell<'a, R, W> {
    /// Create a menu over `storage`, reading from `input` and writing to `output`
    pub fn new(storage: &'a mut Storage, settings: &Settings, input: R, output: W) -> Self {
        Self {
            service: ExpenseService::new(storage),
            currency: settings.currency_symbol.clone(),
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_expense()?,
                "2" => self.view_expenses()?,
                "3" => self.delete_expense()?,
                "4" => self.export()?,
                "5" => self.show_summary()?,
                "6" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting... All data saved.")?;
        self.output.flush()?;
        Ok(())
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn add_expense(&mut self) -> ExpenseResult<Flow> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) or leave blank for today: ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompt("Enter category (e.g., food, transport): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(Flow::Exit);
        };

        // Reject a bad amount before asking for the note
        if Amount::parse(&amount).is_err() {
            writeln!(self.output, "Invalid amount. Must be a number.")?;
            return Ok(Flow::Continue);
        }

        let Some(note) = self.prompt("Optional note: ")? else {
            return Ok(Flow::Exit);
        };

        match self
            .service
            .add(NewExpense::new(date, category, amount, note))
        {
            Ok(_) => writeln!(self.output, "Expense added!")?,
            Err(ExpenseError::Validation(msg)) => writeln!(self.output, "{}", msg)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_expenses(&mut self) -> ExpenseResult<Flow> {
        if self.service.count() == 0 {
            writeln!(self.output, "No expenses recorded yet.")?;
        } else {
            let listing = format_expense_lines(self.service.list(), &self.currency);
            write!(self.output, "\n{}", listing)?;
        }
        Ok(Flow::Continue)
    }

    fn delete_expense(&mut self) -> ExpenseResult<Flow> {
        self.view_expenses()?;
        if self.service.count() == 0 {
            return Ok(Flow::Continue);
        }

        let Some(text) = self.prompt("Enter expense number to delete: ")? else {
            return Ok(Flow::Exit);
        };

        let Ok(position) = text.trim().parse::<usize>() else {
            writeln!(self.output, "Invalid number.")?;
            return Ok(Flow::Continue);
        };

        match self.service.delete(position) {
            Ok(removed) => writeln!(
                self.output,
                "Removed: {}{} on {}",
                self.currency, removed.amount, removed.date
            )?,
            Err(ExpenseError::IndexOutOfRange { .. }) => writeln!(self.output, "Invalid index.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> ExpenseResult<Flow> {
        match self.service.export_default(false) {
            Ok(ExportOutcome::NothingToExport) => {
                writeln!(self.output, "No expenses to export.")?
            }
            Ok(ExportOutcome::Written { csv, .. }) => {
                writeln!(self.output, "Exported to {}", csv.display())?
            }
            Err(e) => writeln!(self.output, "Export failed: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_summary(&mut self) -> ExpenseResult<Flow> {
        match self.service.summarize() {
            None => writeln!(self.output, "No expenses to summarize.")?,
            Some(summary) => write!(
                self.output,
                "\n{}",
                summary.format_terminal(&self.currency)
            )?,
        }
        Ok(Flow::Continue)
    }
}
