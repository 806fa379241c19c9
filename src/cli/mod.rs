//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod category;
pub mod data;
pub mod settings;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_clear, handle_export, handle_import};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
