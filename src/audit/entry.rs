//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 1-based position of the expense at the time of the operation
    pub position: usize,

    /// One-line description of the expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// The expense before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for an added expense
    pub fn create<T: Serialize>(position: usize, summary: Option<String>, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position,
            summary,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Create a new audit entry for a deleted expense
    pub fn delete<T: Serialize>(position: usize, summary: Option<String>, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position,
            summary,
            before: serde_json::to_value(entity).ok(),
            after: None,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"category": "food", "amount": 10});
        let entry = AuditEntry::create(3, Some("food".to_string()), &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.position, 3);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"category": "rent"});
        let entry = AuditEntry::delete(1, None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(1, None, &json!({"category": "food"}));

        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"create\""));
        assert!(!line.contains("summary"));
        assert!(!line.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
    }
}
