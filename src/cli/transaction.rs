//! Income and expense CLI commands
//!
//! The same subcommands serve both collections; the top-level command picks
//! which one.

use clap::Subcommand;

use crate::config::AppConfig;
use crate::display::{format_transaction_line, format_transaction_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{TransactionId, TransactionKind};
use crate::services::LedgerStore;
use crate::storage::PersistenceSlot;

/// Income/expense subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new entry
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g., "42" or "42.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove an entry by id
    #[command(alias = "rm")]
    Remove {
        /// Entry id as shown by `list`
        id: String,
    },

    /// List entries in the order they were recorded
    #[command(alias = "ls")]
    List,
}

/// Handle an income or expense command
pub fn handle_transaction_command<S: PersistenceSlot>(
    store: &mut LedgerStore<S>,
    config: &AppConfig,
    kind: TransactionKind,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
        } => {
            let txn = store.add_transaction(kind, &description, &amount)?;
            println!("{}", format_transaction_line(kind, &txn, store.settings()));
            println!(
                "Total {}: {}",
                kind.collection_name(),
                store.format_currency(store.state().total(kind))
            );
        }

        TransactionCommands::Remove { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| BudgetError::Validation(format!("Invalid id: {}", id)))?;

            if store.remove_transaction(kind, id)? {
                println!("Removed {} {}", kind, id);
            } else {
                println!("No {} entry with id {}", kind, id);
            }
        }

        TransactionCommands::List => {
            print!(
                "{}",
                format_transaction_table(
                    kind,
                    store.transactions(kind),
                    store.settings(),
                    config.display.show_dates,
                )
            );
            println!(
                "Total: {}",
                store.format_currency(store.state().total(kind))
            );
        }
    }

    Ok(())
}
