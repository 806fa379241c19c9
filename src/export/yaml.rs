//! YAML Export functionality
//!
//! Writes the ledger as YAML for a human-readable backup. Only the JSON
//! export is accepted by import.

use crate::error::{BudgetError, BudgetResult};
use crate::models::LedgerState;
use chrono::Utc;
use std::io::Write;

/// Export the ledger to YAML format
pub fn export_ledger_yaml<W: Write>(state: &LedgerState, writer: &mut W) -> BudgetResult<()> {
    let header = format!(
        "# Budget tracker ledger export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # Keep it secure - it contains all your financial data.\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        env!("CARGO_PKG_VERSION"),
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, state).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
