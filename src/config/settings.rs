//! User settings for the expense tracker
//!
//! Display and export preferences, persisted as `settings.json`.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the form window also writes `report.xlsx` on export
    #[serde(default = "default_true")]
    pub export_spreadsheet: bool,

    /// Whether add/delete operations are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            export_spreadsheet: true,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
