//! Core data models for the budget tracker
//!
//! These types describe the ledger: income and expense transactions, spending
//! categories, display settings, and the aggregate that holds them all.

pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod settings;
pub mod transaction;
pub mod validation;

pub use category::Category;
pub use ids::{CategoryId, IdGenerator, TransactionId};
pub use ledger::{BalanceStatus, LedgerPatch, LedgerState, LedgerSummary, PatchError, TotalsOverflow};
pub use money::{DecimalAmountError, Money, MoneyParseError};
pub use settings::{Settings, Theme, UnknownTheme};
pub use transaction::{Transaction, TransactionKind};
pub use validation::{EntryValidationError, ValidationRules};
