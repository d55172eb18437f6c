//! Audit history command

use crate::display::format_audit_history;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    println!("{}", format_audit_history(&entries));
    Ok(())
}
