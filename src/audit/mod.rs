//! Audit logging for the expense tracker
//!
//! Records every add and delete in an append-only audit log next to the
//! backing file.
//!
//! - `AuditEntry`: one operation with timestamp, position and the record value.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL).

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
