//! Input validation rules for new ledger entries
//!
//! Raw text from the caller is checked here before any entity is built, so a
//! rejected entry never reaches the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MoneyParseError};

/// Validation errors for descriptions, names, amounts, and budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyLabel(&'static str),
    LabelTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    InvalidAmount {
        field: &'static str,
        reason: MoneyParseError,
    },
    NonPositiveAmount(&'static str),
    BelowMinimum {
        field: &'static str,
        min: Money,
    },
    AboveMaximum {
        field: &'static str,
        max: Money,
    },
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel(field) => write!(f, "{} cannot be empty", field),
            Self::LabelTooLong { field, len, max } => {
                write!(f, "{} too long ({} chars, max {})", field, len, max)
            }
            Self::InvalidAmount { field, reason } => write!(f, "Invalid {}: {}", field, reason),
            Self::NonPositiveAmount(field) => write!(f, "{} must be greater than zero", field),
            Self::BelowMinimum { field, min } => write!(f, "{} must be at least {}", field, min),
            Self::AboveMaximum { field, max } => write!(f, "{} cannot exceed {}", field, max),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// Limits applied to every add operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default = "default_min_amount")]
    pub min_amount: Money,

    #[serde(default = "default_max_amount")]
    pub max_amount: Money,

    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
}

fn default_min_amount() -> Money {
    Money::from_cents(1)
}

fn default_max_amount() -> Money {
    Money::from_cents(99_999_999)
}

fn default_max_description_length() -> usize {
    100
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_amount: default_min_amount(),
            max_amount: default_max_amount(),
            max_description_length: default_max_description_length(),
        }
    }
}

impl ValidationRules {
    /// Trim a description or name and check it against the length limit
    pub fn label(&self, field: &'static str, raw: &str) -> Result<String, EntryValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EntryValidationError::EmptyLabel(field));
        }

        let len = trimmed.chars().count();
        if len > self.max_description_length {
            return Err(EntryValidationError::LabelTooLong {
                field,
                len,
                max: self.max_description_length,
            });
        }

        Ok(trimmed.to_string())
    }

    /// Parse a raw amount and check it
    pub fn amount(&self, field: &'static str, raw: &str) -> Result<Money, EntryValidationError> {
        let amount = Money::parse(raw)
            .map_err(|reason| EntryValidationError::InvalidAmount { field, reason })?;
        self.check_amount(field, amount)
    }

    /// Check an already-parsed amount
    pub fn check_amount(
        &self,
        field: &'static str,
        amount: Money,
    ) -> Result<Money, EntryValidationError> {
        // Zero and negatives are always rejected, whatever min_amount says.
        if !amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount(field));
        }
        if amount < self.min_amount {
            return Err(EntryValidationError::BelowMinimum {
                field,
                min: self.min_amount,
            });
        }
        if amount > self.max_amount {
            return Err(EntryValidationError::AboveMaximum {
                field,
                max: self.max_amount,
            });
        }
        Ok(amount)
    }
}
