//! Ledger aggregate
//!
//! [`LedgerState`] is the unit of persistence: income, expenses, categories
//! and settings are always saved and loaded together. [`LedgerPatch`] is the
//! partial form read from the persistence slot and from import files, merged
//! over an existing state one top-level field at a time.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::category::Category;
use super::ids::{CategoryId, IdGenerator, TransactionId};
use super::money::Money;
use super::settings::Settings;
use super::transaction::{Transaction, TransactionKind};

/// The whole ledger
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerState {
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub settings: Settings,
}

/// Sign of the balance, used for emphasis by front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Positive,
    Negative,
    Zero,
}

impl BalanceStatus {
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            Self::Positive
        } else if amount.is_negative() {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Zero => write!(f, "zero"),
        }
    }
}

/// Snapshot of the derived figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub status: BalanceStatus,
    pub total_budgeted: Money,
    pub income_count: usize,
    pub expense_count: usize,
    pub category_count: usize,
}

impl LedgerState {
    /// The collection holding transactions of `kind`
    pub fn transactions(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expenses,
        }
    }

    pub fn transactions_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expenses,
        }
    }

    pub fn find_transaction(&self, kind: TransactionKind, id: TransactionId) -> Option<&Transaction> {
        self.transactions(kind).iter().find(|t| t.id == id)
    }

    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Sum of amounts in one collection
    pub fn total(&self, kind: TransactionKind) -> Money {
        self.transactions(kind).iter().map(|t| t.amount).sum()
    }

    pub fn total_income(&self) -> Money {
        self.total(TransactionKind::Income)
    }

    pub fn total_expenses(&self) -> Money {
        self.total(TransactionKind::Expense)
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    pub fn balance_status(&self) -> BalanceStatus {
        BalanceStatus::of(self.balance())
    }

    pub fn total_budgeted(&self) -> Money {
        self.categories.iter().map(|c| c.budget).sum()
    }

    /// Check that every derived total fits in a [`Money`]
    ///
    /// The store holds this for every state it commits, so the plain sums
    /// above never overflow.
    pub fn check_totals(&self) -> Result<(), TotalsOverflow> {
        fn checked_sum(mut amounts: impl Iterator<Item = Money>) -> Option<Money> {
            amounts.try_fold(Money::zero(), Money::checked_add)
        }

        let income = checked_sum(self.income.iter().map(|t| t.amount))
            .ok_or(TotalsOverflow("income"))?;
        let expenses = checked_sum(self.expenses.iter().map(|t| t.amount))
            .ok_or(TotalsOverflow("expenses"))?;
        income
            .checked_sub(expenses)
            .ok_or(TotalsOverflow("balance"))?;
        checked_sum(self.categories.iter().map(|c| c.budget))
            .ok_or(TotalsOverflow("budgeted"))?;
        Ok(())
    }

    pub fn summary(&self) -> LedgerSummary {
        let balance = self.balance();
        LedgerSummary {
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
            balance,
            status: BalanceStatus::of(balance),
            total_budgeted: self.total_budgeted(),
            income_count: self.income.len(),
            expense_count: self.expenses.len(),
            category_count: self.categories.len(),
        }
    }

    /// Largest id in any collection, or 0 for an empty ledger
    pub fn max_id(&self) -> u64 {
        let txn_ids = self.income.iter().chain(&self.expenses).map(|t| t.id.raw());
        let cat_ids = self.categories.iter().map(|c| c.id.raw());
        txn_ids.chain(cat_ids).max().unwrap_or(0)
    }

    /// Drop every entry, keeping settings
    pub fn cleared(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            ..Self::default()
        }
    }
}

/// A total too large to represent, named by what it sums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsOverflow(pub &'static str);

impl fmt::Display for TotalsOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} total is too large to represent", self.0)
    }
}

impl std::error::Error for TotalsOverflow {}

/// Why a ledger document could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    Malformed(String),
    NotAnObject,
    DuplicateId {
        collection: &'static str,
        id: u64,
    },
    IdOutOfRange {
        collection: &'static str,
        id: u64,
    },
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "not a valid ledger document: {}", e),
            Self::NotAnObject => write!(f, "ledger document must be a JSON object"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id {} in {}", id, collection)
            }
            Self::IdOutOfRange { collection, id } => write!(
                f,
                "id {} in {} is above the maximum of {}",
                id,
                collection,
                IdGenerator::MAX_RAW
            ),
        }
    }
}

impl std::error::Error for PatchError {}

/// A possibly partial ledger document
///
/// Each present field replaces the matching field of the target wholesale:
/// importing `{"income": [...]}` swaps the entire income list and leaves the
/// rest alone. A partial `settings` object fills its missing fields with
/// defaults. Unknown top-level fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LedgerPatch {
    #[serde(default)]
    pub income: Option<Vec<Transaction>>,
    #[serde(default)]
    pub expenses: Option<Vec<Transaction>>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

impl LedgerPatch {
    /// Parse and check a JSON ledger document
    pub fn from_json(text: &str) -> Result<Self, PatchError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| PatchError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(PatchError::NotAnObject);
        }

        let patch: LedgerPatch =
            serde_json::from_value(value).map_err(|e| PatchError::Malformed(e.to_string()))?;
        patch.check_ids()?;
        Ok(patch)
    }

    /// Ids must be unique within a collection and no larger than
    /// [`IdGenerator::MAX_RAW`]
    fn check_ids(&self) -> Result<(), PatchError> {
        fn check(collection: &'static str, ids: impl Iterator<Item = u64>) -> Result<(), PatchError> {
            let mut seen = HashSet::new();
            for id in ids {
                if id > IdGenerator::MAX_RAW {
                    return Err(PatchError::IdOutOfRange { collection, id });
                }
                if !seen.insert(id) {
                    return Err(PatchError::DuplicateId { collection, id });
                }
            }
            Ok(())
        }

        for (collection, list) in [("income", &self.income), ("expenses", &self.expenses)] {
            if let Some(list) = list {
                check(collection, list.iter().map(|t| t.id.raw()))?;
            }
        }
        if let Some(categories) = &self.categories {
            check("categories", categories.iter().map(|c| c.id.raw()))?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_none()
            && self.expenses.is_none()
            && self.categories.is_none()
            && self.settings.is_none()
    }

    /// Merge this patch over `base`
    pub fn apply(self, mut base: LedgerState) -> LedgerState {
        if let Some(income) = self.income {
            base.income = income;
        }
        if let Some(expenses) = self.expenses {
            base.expenses = expenses;
        }
        if let Some(categories) = self.categories {
            base.categories = categories;
        }
        if let Some(settings) = self.settings {
            base.settings = settings;
        }
        base
    }
}
