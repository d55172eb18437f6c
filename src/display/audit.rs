//! Audit history display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;

use super::expense::truncate;

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "When (UTC)")]
    timestamp: String,
    #[tabled(rename = "Operation")]
    operation: String,
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Expense")]
    summary: String,
}

/// Format audit entries as a table, oldest first
pub fn format_audit_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.".to_string();
    }

    let rows = entries.iter().map(|e| AuditRow {
        timestamp: e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        operation: e.operation.to_string(),
        position: e.position,
        summary: truncate(e.summary.as_deref().unwrap_or(""), 50),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
