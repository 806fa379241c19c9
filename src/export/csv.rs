//! CSV Export functionality
//!
//! Exports income and expense entries as one spreadsheet-friendly table.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{LedgerState, TransactionKind};
use std::io::Write;

/// Export every transaction to CSV, income first, each in insertion order
pub fn export_transactions_csv<W: Write>(state: &LedgerState, writer: W) -> BudgetResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let export_err = |e: ::csv::Error| BudgetError::Export(e.to_string());

    csv_writer
        .write_record(["kind", "id", "date", "description", "amount"])
        .map_err(export_err)?;

    for kind in TransactionKind::ALL {
        for txn in state.transactions(kind) {
            csv_writer
                .write_record([
                    kind.to_string(),
                    txn.id.to_string(),
                    txn.date.to_rfc3339(),
                    txn.description.clone(),
                    txn.amount.to_string(),
                ])
                .map_err(export_err)?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
