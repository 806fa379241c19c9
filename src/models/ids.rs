//! Strongly-typed ID wrappers for ledger entities
//!
//! Ids are plain integers on the wire (`"id": 1718000000000`) so files written
//! by earlier versions of the tracker, which used millisecond timestamps,
//! load unchanged. New ids come from an [`IdGenerator`] owned by the store.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub const fn raw(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(TransactionId);
define_id!(CategoryId);

/// Issues unique, strictly increasing ids for one store
///
/// Ids track wall-clock milliseconds while the clock moves forward, and fall
/// back to `last + 1` when two entities are created within the same
/// millisecond or the clock steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Largest id a JSON number carries exactly
    pub const MAX_RAW: u64 = (1 << 53) - 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure every future id is greater than `raw`
    pub fn observe(&mut self, raw: u64) {
        self.last = self.last.max(raw);
    }

    /// The highest id issued or observed so far
    pub fn last(&self) -> u64 {
        self.last
    }

    /// Issue the next raw id, or `None` once ids above [`Self::MAX_RAW`]
    /// would be needed
    pub fn next_raw(&mut self) -> Option<u64> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let next = now.max(self.last.checked_add(1)?);
        if next > Self::MAX_RAW {
            return None;
        }
        self.last = next;
        Some(next)
    }

    pub fn next_transaction_id(&mut self) -> Option<TransactionId> {
        self.next_raw().map(TransactionId::from_raw)
    }

    pub fn next_category_id(&mut self) -> Option<CategoryId> {
        self.next_raw().map(CategoryId::from_raw)
    }
}
