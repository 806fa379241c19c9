//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod category;
pub mod summary;
pub mod transaction;

pub use category::format_category_table;
pub use summary::{format_settings, format_summary};
pub use transaction::{format_transaction_line, format_transaction_table};
