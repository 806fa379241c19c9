//! Export module for the budget tracker
//!
//! Provides ledger export in multiple formats:
//! - JSON: the canonical ledger document, importable
//! - YAML: human-readable backup
//! - CSV: income and expense entries for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

use chrono::NaiveDate;
use clap::ValueEnum;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::LedgerState;

pub use self::csv::export_transactions_csv;
pub use json::{export_ledger_json, ledger_to_json};
pub use yaml::export_ledger_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Full ledger as JSON (can be imported back)
    #[default]
    Json,
    /// Full ledger as YAML
    Yaml,
    /// Income and expense entries as CSV
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// Default export file name, e.g. `budget-data-2025-01-31.json`
pub fn export_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!("budget-data-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Write the ledger in the chosen format
pub fn write_export<W: Write>(
    state: &LedgerState,
    format: ExportFormat,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => export_ledger_json(state, writer),
        ExportFormat::Yaml => export_ledger_yaml(state, writer),
        ExportFormat::Csv => export_transactions_csv(state, writer),
    }
}
