//! Transaction model
//!
//! One record shape serves both income and expense entries; which collection
//! an entry lives in is given by [`TransactionKind`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Which ledger collection a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Both kinds, in display order
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// Field name of the collection in the persisted ledger
    pub fn collection_name(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expenses",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction kind: {}", other)),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Money,
    /// When the entry was recorded
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction dated now
    ///
    /// Callers validate `description` and `amount` first; see
    /// [`ValidationRules`](super::ValidationRules).
    pub fn new(id: TransactionId, description: impl Into<String>, amount: Money) -> Self {
        Self::with_date(id, description, amount, Utc::now())
    }

    pub fn with_date(
        id: TransactionId,
        description: impl Into<String>,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}
