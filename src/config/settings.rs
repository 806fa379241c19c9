//! Application configuration
//!
//! `config.json` holds preferences about the program rather than the ledger:
//! which persistence slot to use, the validation limits for new entries, and
//! display options. Currency and theme live in the ledger itself.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::ValidationRules;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Name of the default persistence slot
pub const DEFAULT_SLOT_NAME: &str = "budgetAppData";

/// Options for list rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Show the recorded date next to each transaction
    #[serde(default = "default_true")]
    pub show_dates: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { show_dates: true }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key of the persistence slot holding the ledger
    #[serde(default = "default_slot_name")]
    pub slot_name: String,

    #[serde(default)]
    pub validation: ValidationRules,

    #[serde(default)]
    pub display: DisplayOptions,
}

fn default_schema_version() -> u32 {
    1
}

fn default_slot_name() -> String {
    DEFAULT_SLOT_NAME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            slot_name: default_slot_name(),
            validation: ValidationRules::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load the configuration, or defaults if the file doesn't exist yet
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let config: AppConfig = read_json(paths.config_file())
            .map_err(|e| BudgetError::Config(format!("Failed to load configuration: {}", e)))?;

        if config.slot_name.trim().is_empty() {
            return Err(BudgetError::Config("slot_name cannot be empty".into()));
        }

        Ok(config)
    }

    /// Save the configuration to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.config_file(), self)
            .map_err(|e| BudgetError::Config(format!("Failed to save configuration: {}", e)))
    }
}
