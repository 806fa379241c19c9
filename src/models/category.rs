//! Category model
//!
//! A category is a named spending bucket with a budget. `spent` is carried as
//! stored and is not derived from the expense list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A spending category with an allocated budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Allocated limit
    pub budget: Money,
    #[serde(default)]
    pub spent: Money,
}

impl Category {
    /// Create a new category with nothing spent
    pub fn new(id: CategoryId, name: impl Into<String>, budget: Money) -> Self {
        Self {
            id,
            name: name.into(),
            budget,
            spent: Money::zero(),
        }
    }

    /// Budget left after what has been spent (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
