//! Budget tracker - a local-first personal budget ledger
//!
//! This library records income entries, expense entries, and spending
//! categories with budgets, keeps running totals and a balance, and persists
//! the whole ledger to a local slot after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and application configuration
//! - `error`: Custom error types
//! - `models`: Ledger data models (transactions, categories, settings)
//! - `storage`: Atomic JSON file I/O and persistence slots
//! - `services`: The ledger store that owns and mutates the ledger
//! - `export`: JSON, YAML, and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```
//! use budget_tracker::services::LedgerStore;
//! use budget_tracker::storage::MemorySlot;
//!
//! let mut store = LedgerStore::open(MemorySlot::new("budgetAppData"))?;
//! let salary = store.add_income("Salary", "2500.00")?;
//! store.add_expense("Rent", "1200")?;
//!
//! assert_eq!(store.format_currency(salary.amount), "$2500.00");
//! assert_eq!(store.format_currency(store.balance()), "$1300.00");
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use services::LedgerStore;
