//! Service layer for the budget tracker
//!
//! The service layer owns the ledger on top of the storage layer, handling
//! validation, derived figures, and persistence of every change.

pub mod ledger;

pub use ledger::LedgerStore;
