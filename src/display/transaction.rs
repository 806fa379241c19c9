//! Transaction display formatting
//!
//! Renders income and expense lists as tables for terminal output.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::{Settings, Transaction, TransactionKind};

/// Format one collection as a table, in insertion order
pub fn format_transaction_table(
    kind: TransactionKind,
    transactions: &[Transaction],
    settings: &Settings,
    show_dates: bool,
) -> String {
    if transactions.is_empty() {
        return format!("No {} entries.\n", kind);
    }

    let mut builder = Builder::default();

    let mut header = vec!["ID"];
    if show_dates {
        header.push("Date");
    }
    header.extend(["Description", "Amount"]);
    builder.push_record(header);

    for txn in transactions {
        let mut row = vec![txn.id.to_string()];
        if show_dates {
            row.push(txn.date.format("%Y-%m-%d").to_string());
        }
        row.push(truncate(&txn.description, 40));
        row.push(settings.format_currency(txn.amount));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// One-line confirmation for a newly recorded entry
pub fn format_transaction_line(kind: TransactionKind, txn: &Transaction, settings: &Settings) -> String {
    format!(
        "Added {} '{}' for {} (id {})",
        kind,
        txn.description,
        settings.format_currency(txn.amount),
        txn.id
    )
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
