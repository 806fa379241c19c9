//! JSON Export functionality
//!
//! The JSON export is the ledger document itself, pretty-printed, so an
//! exported file can be imported back without conversion.

use crate::error::{BudgetError, BudgetResult};
use crate::models::LedgerState;
use std::io::Write;

/// Pretty-printed JSON of the whole ledger
pub fn ledger_to_json(state: &LedgerState) -> BudgetResult<String> {
    serde_json::to_string_pretty(state).map_err(|e| BudgetError::Export(e.to_string()))
}

/// Write the whole ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(state: &LedgerState, writer: &mut W) -> BudgetResult<()> {
    serde_json::to_writer_pretty(&mut *writer, state)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, LedgerPatch, Money, Transaction, TransactionId};

    fn sample_ledger() -> LedgerState {
        let mut ledger = LedgerState::default();
        ledger.income.push(Transaction::new(
            TransactionId::from_raw(1),
            "Salary",
            Money::from_cents(250000),
        ));
        ledger.categories.push(Category::new(
            CategoryId::from_raw(2),
            "Food",
            Money::from_cents(40000),
        ));
        ledger
    }

    #[test]
    fn test_top_level_shape() {
        let json = ledger_to_json(&sample_ledger()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for key in ["income", "expenses", "categories", "settings"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["settings"]["currency"], "$");
        assert_eq!(value["settings"]["theme"], "light");
        assert_eq!(value["categories"][0]["spent"], 0.0);
    }

    #[test]
    fn test_export_is_importable() {
        let ledger = sample_ledger();
        let mut out = Vec::new();
        export_ledger_json(&ledger, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));

        let restored = LedgerPatch::from_json(&text).unwrap().apply(LedgerState::default());
        assert_eq!(restored, ledger);
    }
}
