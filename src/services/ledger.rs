//! Ledger store
//!
//! [`LedgerStore`] owns the ledger and is the only path through which it
//! changes. Every mutation runs validate, stage, persist, commit: the change is
//! applied to a copy of the state, the copy is written to the persistence
//! slot, and only once that write succeeds does the copy replace the
//! in-memory state. A failed write therefore leaves memory and slot agreeing
//! on the previous ledger.

use tracing::{debug, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::ledger_to_json;
use crate::models::{
    BalanceStatus, Category, CategoryId, IdGenerator, LedgerPatch, LedgerState, LedgerSummary,
    Money, Settings, Theme, Transaction, TransactionId, TransactionKind, ValidationRules,
};
use crate::storage::PersistenceSlot;

type ThemeHook = Box<dyn FnMut(Theme)>;

/// The ledger and the slot it is persisted to
pub struct LedgerStore<S: PersistenceSlot> {
    slot: S,
    state: LedgerState,
    rules: ValidationRules,
    ids: IdGenerator,
    theme_hook: Option<ThemeHook>,
}

impl<S: PersistenceSlot> LedgerStore<S> {
    /// Open the store with default validation rules
    pub fn open(slot: S) -> BudgetResult<Self> {
        Self::open_with_rules(slot, ValidationRules::default())
    }

    /// Load whatever the slot holds, merged over an empty ledger
    ///
    /// A slot that was never written yields the default ledger. A slot whose
    /// contents cannot be read as a ledger is a persistence error rather than
    /// being silently replaced.
    pub fn open_with_rules(slot: S, rules: ValidationRules) -> BudgetResult<Self> {
        let state = match slot.load()? {
            Some(text) => {
                let patch = LedgerPatch::from_json(&text).map_err(|e| {
                    BudgetError::Persistence(format!(
                        "saved ledger in slot '{}' is unreadable: {}",
                        slot.name(),
                        e
                    ))
                })?;
                let state = patch.apply(LedgerState::default());
                state.check_totals().map_err(|e| {
                    BudgetError::Persistence(format!(
                        "saved ledger in slot '{}' is unreadable: {}",
                        slot.name(),
                        e
                    ))
                })?;
                state
            }
            None => {
                debug!(slot = slot.name(), "slot is empty, starting a new ledger");
                LedgerState::default()
            }
        };

        let mut ids = IdGenerator::new();
        ids.observe(state.max_id());

        debug!(
            slot = slot.name(),
            income = state.income.len(),
            expenses = state.expenses.len(),
            categories = state.categories.len(),
            "ledger loaded"
        );

        Ok(Self {
            slot,
            state,
            rules,
            ids,
            theme_hook: None,
        })
    }

    /// Register a callback run whenever the theme is written
    pub fn on_theme_change(&mut self, hook: impl FnMut(Theme) + 'static) {
        self.theme_hook = Some(Box::new(hook));
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn transactions(&self, kind: TransactionKind) -> &[Transaction] {
        self.state.transactions(kind)
    }

    pub fn income(&self) -> &[Transaction] {
        &self.state.income
    }

    pub fn expenses(&self) -> &[Transaction] {
        &self.state.expenses
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    /// Write `next` to the slot, then make it the current state
    fn commit(&mut self, next: LedgerState) -> BudgetResult<()> {
        next.check_totals()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let contents = serde_json::to_string(&next)?;
        if let Err(err) = self.slot.store(&contents) {
            warn!(slot = self.slot.name(), error = %err, "persist failed, change rolled back");
            return Err(err);
        }
        self.state = next;
        Ok(())
    }

    fn fire_theme_hook(&mut self) {
        let theme = self.state.settings.theme;
        if let Some(hook) = self.theme_hook.as_mut() {
            hook(theme);
        }
    }

    // Transactions

    /// Add an entry from raw input text
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: &str,
    ) -> BudgetResult<Transaction> {
        let amount = self.rules.amount("Amount", amount)?;
        self.add_transaction_amount(kind, description, amount)
    }

    /// Add an entry with an already-parsed amount
    pub fn add_transaction_amount(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: Money,
    ) -> BudgetResult<Transaction> {
        let description = self.rules.label("Description", description)?;
        let amount = self.rules.check_amount("Amount", amount)?;

        let id = self.ids.next_transaction_id().ok_or_else(ids_exhausted)?;
        let txn = Transaction::new(id, description, amount);

        let mut next = self.state.clone();
        next.transactions_mut(kind).push(txn.clone());
        self.commit(next)?;

        info!(%kind, id = %txn.id, amount = %txn.amount, "transaction added");
        Ok(txn)
    }

    pub fn add_income(&mut self, description: &str, amount: &str) -> BudgetResult<Transaction> {
        self.add_transaction(TransactionKind::Income, description, amount)
    }

    pub fn add_expense(&mut self, description: &str, amount: &str) -> BudgetResult<Transaction> {
        self.add_transaction(TransactionKind::Expense, description, amount)
    }

    /// Remove an entry by id; returns whether anything was removed
    ///
    /// An unknown id is not an error. The ledger is persisted either way.
    pub fn remove_transaction(
        &mut self,
        kind: TransactionKind,
        id: TransactionId,
    ) -> BudgetResult<bool> {
        let mut next = self.state.clone();
        let list = next.transactions_mut(kind);
        let before = list.len();
        list.retain(|t| t.id != id);
        let removed = list.len() != before;

        self.commit(next)?;

        if removed {
            info!(%kind, %id, "transaction removed");
        } else {
            debug!(%kind, %id, "no transaction with that id");
        }
        Ok(removed)
    }

    pub fn find_transaction(&self, kind: TransactionKind, id: TransactionId) -> Option<&Transaction> {
        self.state.find_transaction(kind, id)
    }

    // Categories

    /// Add a category from raw input text
    pub fn add_category(&mut self, name: &str, budget: &str) -> BudgetResult<Category> {
        let budget = self.rules.amount("Budget", budget)?;
        self.add_category_budget(name, budget)
    }

    /// Add a category with an already-parsed budget
    pub fn add_category_budget(&mut self, name: &str, budget: Money) -> BudgetResult<Category> {
        let name = self.rules.label("Category name", name)?;
        let budget = self.rules.check_amount("Budget", budget)?;

        let id = self.ids.next_category_id().ok_or_else(ids_exhausted)?;
        let category = Category::new(id, name, budget);

        let mut next = self.state.clone();
        next.categories.push(category.clone());
        self.commit(next)?;

        info!(id = %category.id, budget = %category.budget, "category added");
        Ok(category)
    }

    /// Remove a category by id; returns whether anything was removed
    pub fn remove_category(&mut self, id: CategoryId) -> BudgetResult<bool> {
        let mut next = self.state.clone();
        let before = next.categories.len();
        next.categories.retain(|c| c.id != id);
        let removed = next.categories.len() != before;

        self.commit(next)?;

        if removed {
            info!(%id, "category removed");
        }
        Ok(removed)
    }

    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.state.find_category(id)
    }

    // Derived figures

    pub fn total_income(&self) -> Money {
        self.state.total_income()
    }

    pub fn total_expenses(&self) -> Money {
        self.state.total_expenses()
    }

    pub fn balance(&self) -> Money {
        self.state.balance()
    }

    pub fn balance_status(&self) -> BalanceStatus {
        self.state.balance_status()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.state.summary()
    }

    /// Render an amount using the current currency prefix
    pub fn format_currency(&self, amount: Money) -> String {
        self.state.settings.format_currency(amount)
    }

    // Settings

    /// Set the currency prefix; any text is accepted
    pub fn update_currency(&mut self, symbol: &str) -> BudgetResult<()> {
        let mut next = self.state.clone();
        next.settings.currency = symbol.to_string();
        self.commit(next)?;

        info!(currency = symbol, "currency updated");
        Ok(())
    }

    pub fn update_theme(&mut self, theme: Theme) -> BudgetResult<()> {
        let mut next = self.state.clone();
        next.settings.theme = theme;
        self.commit(next)?;

        info!(%theme, "theme updated");
        self.fire_theme_hook();
        Ok(())
    }

    /// Set the theme by name, rejecting names outside the permitted set
    pub fn update_theme_named(&mut self, name: &str) -> BudgetResult<()> {
        let theme = name
            .parse::<Theme>()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.update_theme(theme)
    }

    // Whole-ledger transfer

    /// Pretty-printed JSON of the entire ledger
    pub fn export_state(&self) -> BudgetResult<String> {
        ledger_to_json(&self.state)
    }

    /// Merge a JSON document over the current ledger
    ///
    /// Each top-level field present in `text` replaces the matching field
    /// wholesale; absent fields are kept. Unparseable input is an import
    /// error and leaves the ledger untouched.
    pub fn import_state(&mut self, text: &str) -> BudgetResult<&LedgerState> {
        let patch = LedgerPatch::from_json(text)?;
        let writes_settings = patch.settings.is_some();

        let next = patch.apply(self.state.clone());
        next.check_totals()
            .map_err(|e| BudgetError::Import(e.to_string()))?;
        self.commit(next)?;
        self.ids.observe(self.state.max_id());

        info!(
            income = self.state.income.len(),
            expenses = self.state.expenses.len(),
            categories = self.state.categories.len(),
            "ledger imported"
        );

        if writes_settings {
            self.fire_theme_hook();
        }
        Ok(&self.state)
    }

    /// Empty every collection, keeping settings
    ///
    /// Confirming with the user is the caller's job.
    pub fn clear_all_data(&mut self) -> BudgetResult<&LedgerState> {
        let next = self.state.cleared();
        self.commit(next)?;

        info!("ledger cleared");
        Ok(&self.state)
    }
}

fn ids_exhausted() -> BudgetError {
    BudgetError::Validation("no ids left: the ledger already holds the largest id".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileSlot, MemorySlot};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn new_store() -> LedgerStore<MemorySlot> {
        LedgerStore::open(MemorySlot::new("budgetAppData")).unwrap()
    }

    fn saved(store: &LedgerStore<MemorySlot>) -> LedgerState {
        serde_json::from_str(store.slot().contents().unwrap()).unwrap()
    }

    /// Slot that refuses writes once `fail` is set
    struct FlakySlot {
        inner: MemorySlot,
        fail: Rc<RefCell<bool>>,
    }

    impl PersistenceSlot for FlakySlot {
        fn name(&self) -> &str {
            self.inner.name()
        }

        fn load(&self) -> BudgetResult<Option<String>> {
            self.inner.load()
        }

        fn store(&mut self, contents: &str) -> BudgetResult<()> {
            if *self.fail.borrow() {
                return Err(BudgetError::Persistence("quota exceeded".into()));
            }
            self.inner.store(contents)
        }
    }

    #[test]
    fn test_new_store_has_default_ledger() {
        let store = new_store();
        assert_eq!(store.state(), &LedgerState::default());
        assert_eq!(store.settings().currency, "$");
        assert_eq!(store.settings().theme, Theme::Light);
        assert!(store.slot().contents().is_none());
    }

    #[test]
    fn test_add_income_and_format() {
        let mut store = new_store();
        let txn = store.add_income("Salary", "2500.00").unwrap();

        assert_eq!(txn.description, "Salary");
        assert_eq!(txn.amount, Money::from_cents(250000));
        assert_eq!(store.format_currency(txn.amount), "$2500.00");
        assert_eq!(store.income(), &[txn]);
    }

    #[test]
    fn test_add_persists_before_returning() {
        let mut store = new_store();
        let txn = store.add_expense("  Rent  ", "1200").unwrap();

        assert_eq!(txn.description, "Rent");
        assert_eq!(saved(&store), *store.state());
        assert_eq!(saved(&store).expenses[0].id, txn.id);
    }

    #[test]
    fn test_totals_match_sum_of_added_amounts() {
        let mut store = new_store();
        for amount in ["10.10", "20.20", "0.01", "999.99"] {
            store.add_income("pay", amount).unwrap();
        }
        store.add_expense("coffee", "3.50").unwrap();
        store.add_expense("lunch", "12").unwrap();

        assert_eq!(store.total_income().cents(), 1010 + 2020 + 1 + 99999);
        assert_eq!(store.total_expenses().cents(), 1550);
        assert_eq!(store.balance().cents(), 103030 - 1550);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = new_store();
        let first = store.add_expense("first", "1").unwrap();
        let second = store.add_expense("second", "2").unwrap();
        let third = store.add_expense("third", "3").unwrap();

        let ids: Vec<_> = store.expenses().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn test_ids_unique_under_rapid_creation() {
        let mut store = new_store();
        let mut ids = std::collections::HashSet::new();
        for i in 0..200 {
            let txn = store.add_income(&format!("entry {}", i), "1").unwrap();
            assert!(ids.insert(txn.id.raw()));
            let cat = store.add_category(&format!("cat {}", i), "5").unwrap();
            assert!(ids.insert(cat.id.raw()));
        }
    }

    #[test]
    fn test_invalid_transactions_rejected() {
        let mut store = new_store();
        for (description, amount) in [("", "10"), ("   ", "10"), ("Pay", "0"), ("Pay", "-1"), ("Pay", "abc"), ("Pay", "")] {
            let err = store.add_income(description, amount).unwrap_err();
            assert!(err.is_validation(), "{:?}/{:?} gave {}", description, amount, err);
        }
        assert!(store.income().is_empty());
        assert!(store.slot().contents().is_none());
    }

    #[test]
    fn test_invalid_categories_rejected() {
        let mut store = new_store();
        store.add_category("Rent", "1000").unwrap();
        let before = store.categories().to_vec();

        assert!(store.add_category("", "100").unwrap_err().is_validation());
        assert!(store.add_category("Food", "-5").unwrap_err().is_validation());
        assert!(store
            .add_category_budget("Food", Money::from_cents(-500))
            .unwrap_err()
            .is_validation());

        assert_eq!(store.categories(), before.as_slice());
    }

    #[test]
    fn test_add_category_starts_unspent() {
        let mut store = new_store();
        let cat = store.add_category("Food", "400").unwrap();
        assert_eq!(cat.spent, Money::zero());
        assert_eq!(cat.budget.cents(), 40000);

        store.add_expense("Groceries", "120").unwrap();
        assert_eq!(store.find_category(cat.id).unwrap().spent, Money::zero());
    }

    #[test]
    fn test_remove_transaction() {
        let mut store = new_store();
        let keep = store.add_income("keep", "100").unwrap();
        let drop = store.add_income("drop", "40").unwrap();

        assert!(store.remove_transaction(TransactionKind::Income, drop.id).unwrap());
        assert!(store.find_transaction(TransactionKind::Income, drop.id).is_none());
        assert!(store.find_transaction(TransactionKind::Income, keep.id).is_some());
        assert_eq!(store.total_income().cents(), 10000);
        assert_eq!(saved(&store).income.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = new_store();
        let txn = store.add_expense("rent", "500").unwrap();
        let total = store.total_expenses();

        let removed = store
            .remove_transaction(TransactionKind::Expense, TransactionId::from_raw(1))
            .unwrap();
        assert!(!removed);
        assert_eq!(store.total_expenses(), total);

        // Ids are scoped to their collection
        assert!(!store.remove_transaction(TransactionKind::Income, txn.id).unwrap());
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn test_remove_category() {
        let mut store = new_store();
        let cat = store.add_category("Fun", "50").unwrap();

        assert!(store.remove_category(cat.id).unwrap());
        assert!(store.find_category(cat.id).is_none());
        assert!(!store.remove_category(cat.id).unwrap());
    }

    #[test]
    fn test_balance_classification() {
        let cases = [
            ("100", "40", 6000, BalanceStatus::Positive),
            ("40", "100", -6000, BalanceStatus::Negative),
            ("50", "50", 0, BalanceStatus::Zero),
        ];
        for (income, expense, cents, status) in cases {
            let mut store = new_store();
            store.add_income("in", income).unwrap();
            store.add_expense("out", expense).unwrap();
            assert_eq!(store.balance().cents(), cents);
            assert_eq!(store.balance_status(), status);
        }

        let mut store = new_store();
        store.add_income("in", "40").unwrap();
        store.add_expense("out", "100").unwrap();
        assert_eq!(store.format_currency(store.balance()), "$-60.00");
    }

    #[test]
    fn test_update_settings() {
        let mut store = new_store();
        store.update_currency("€").unwrap();
        store.update_theme_named("dark").unwrap();

        assert_eq!(store.settings().currency, "€");
        assert_eq!(store.settings().theme, Theme::Dark);
        assert_eq!(saved(&store).settings, store.settings().clone());
        assert_eq!(store.format_currency(Money::from_cents(1999)), "€19.99");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut store = new_store();
        let err = store.update_theme_named("solarized").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.settings().theme, Theme::Light);
    }

    #[test]
    fn test_theme_hook_runs_on_theme_writes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = new_store();
        let sink = Rc::clone(&seen);
        store.on_theme_change(move |theme| sink.borrow_mut().push(theme));

        store.update_theme(Theme::Dark).unwrap();
        store.update_currency("£").unwrap();
        store.import_state(r#"{"settings": {"currency": "$", "theme": "light"}}"#).unwrap();
        store.import_state(r#"{"income": []}"#).unwrap();

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let mut source = new_store();
        source.add_income("Salary", "2500").unwrap();
        source.add_expense("Rent", "1200.50").unwrap();
        source.add_category("Food", "300").unwrap();
        source.update_currency("€").unwrap();
        source.update_theme(Theme::Dark).unwrap();

        let exported = source.export_state().unwrap();
        assert!(exported.contains("\n  \"income\""));

        let mut target = new_store();
        target.import_state(&exported).unwrap();
        assert_eq!(target.state(), source.state());
        assert_eq!(saved(&target), *source.state());
    }

    #[test]
    fn test_import_settings_only_keeps_collections() {
        let mut store = new_store();
        store.add_income("Salary", "2500").unwrap();
        store.add_expense("Rent", "900").unwrap();
        store.add_category("Food", "300").unwrap();
        let before = store.state().clone();

        store
            .import_state(r#"{"settings": {"currency": "¥", "theme": "dark"}}"#)
            .unwrap();

        assert_eq!(store.income(), before.income.as_slice());
        assert_eq!(store.expenses(), before.expenses.as_slice());
        assert_eq!(store.categories(), before.categories.as_slice());
        assert_eq!(store.settings().currency, "¥");
        assert_eq!(store.settings().theme, Theme::Dark);
    }

    #[test]
    fn test_import_replaces_whole_collections() {
        let mut store = new_store();
        store.add_income("old", "1").unwrap();
        store.add_income("older", "2").unwrap();

        store
            .import_state(
                r#"{"income": [{"id": 5, "description": "new", "amount": 10, "date": "2024-01-01T00:00:00.000Z"}]}"#,
            )
            .unwrap();

        assert_eq!(store.income().len(), 1);
        assert_eq!(store.income()[0].description, "new");
    }

    #[test]
    fn test_import_malformed_leaves_state_untouched() {
        let mut store = new_store();
        store.add_income("Salary", "2500").unwrap();
        let before = store.state().clone();
        let saved_before = store.slot().contents().map(str::to_string);

        for bad in ["{", "[1, 2]", "\"text\"", r#"{"income": [{"id": "x"}]}"#] {
            let err = store.import_state(bad).unwrap_err();
            assert!(err.is_import(), "{} gave {}", bad, err);
        }

        assert_eq!(store.state(), &before);
        assert_eq!(store.slot().contents().map(str::to_string), saved_before);
    }

    #[test]
    fn test_new_ids_stay_above_imported_ids() {
        let mut store = new_store();
        let far_future = IdGenerator::MAX_RAW - 1_000;
        store
            .import_state(&format!(
                r#"{{"categories": [{{"id": {}, "name": "Rent", "budget": 1000, "spent": 0}}]}}"#,
                far_future
            ))
            .unwrap();

        let cat = store.add_category("Food", "10").unwrap();
        assert!(cat.id.raw() > far_future);
    }

    #[test]
    fn test_ids_never_repeat_after_importing_the_largest_id() {
        let mut store = new_store();
        store
            .import_state(&format!(
                r#"{{"income": [{{"id": {}, "description": "a", "amount": 1, "date": "2024-01-01T00:00:00Z"}}]}}"#,
                IdGenerator::MAX_RAW
            ))
            .unwrap();

        assert!(store.add_income("b", "2").unwrap_err().is_validation());
        assert!(store.add_category("c", "2").unwrap_err().is_validation());
        assert_eq!(store.income().len(), 1);
        assert!(store.categories().is_empty());

        let err = store
            .import_state(&format!(
                r#"{{"income": [{{"id": {}, "description": "a", "amount": 1, "date": "2024-01-01T00:00:00Z"}}]}}"#,
                u64::MAX
            ))
            .unwrap_err();
        assert!(err.is_import());
    }

    fn income_document(count: usize, amount: &str) -> String {
        let entries: Vec<String> = (1..=count)
            .map(|id| {
                format!(
                    r#"{{"id": {}, "description": "e", "amount": {}, "date": "2024-01-01T00:00:00Z"}}"#,
                    id, amount
                )
            })
            .collect();
        format!(r#"{{"income": [{}]}}"#, entries.join(","))
    }

    #[test]
    fn test_import_rejects_amounts_that_overflow_totals() {
        let mut store = new_store();
        store.add_income("Salary", "2500").unwrap();
        let before = store.state().clone();

        let err = store.import_state(&income_document(2, "9e16")).unwrap_err();
        assert!(err.is_import(), "{}", err);

        // Each amount is in range, but the income total is not
        let err = store
            .import_state(&income_document(1100, "90000000000000"))
            .unwrap_err();
        assert!(err.is_import(), "{}", err);
        assert!(err.to_string().contains("income total"));

        assert_eq!(store.state(), &before);
        assert_eq!(store.total_income().cents(), 250000);
    }

    #[test]
    fn test_slot_with_overflowing_totals_is_persistence_error() {
        let slot = MemorySlot::with_contents("budgetAppData", income_document(1100, "90000000000000"));
        let err = LedgerStore::open(slot).err().unwrap();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_sub_cent_amounts_are_rejected_not_rounded() {
        let mut store = new_store();

        for amount in ["0.004", "10.005"] {
            let err = store.add_income("x", amount).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("more than two decimal places"), "{}", err);
        }
        assert!(store.income().is_empty());

        let err = store.import_state(&income_document(1, "0.333")).unwrap_err();
        assert!(err.is_import());
        assert!(store.income().is_empty());
    }

    #[test]
    fn test_exponent_amounts_are_accepted() {
        let mut store = new_store();
        let txn = store.add_income("Bonus", "1e3").unwrap();
        assert_eq!(store.format_currency(txn.amount), "$1000.00");
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut store = new_store();
        store.add_income("Salary", "2500").unwrap();
        store.add_expense("Rent", "900").unwrap();
        store.add_category("Food", "300").unwrap();
        store.update_currency("€").unwrap();
        store.update_theme(Theme::Dark).unwrap();

        let cleared = store.clear_all_data().unwrap().clone();

        assert!(cleared.income.is_empty());
        assert!(cleared.expenses.is_empty());
        assert!(cleared.categories.is_empty());
        assert_eq!(cleared.settings.currency, "€");
        assert_eq!(cleared.settings.theme, Theme::Dark);
        assert_eq!(saved(&store), cleared);
    }

    #[test]
    fn test_reopen_merges_saved_data_over_defaults() {
        let slot = MemorySlot::with_contents("budgetAppData", r#"{"expenses": [], "settings": {"currency": "€"}}"#);
        let store = LedgerStore::open(slot).unwrap();

        assert!(store.income().is_empty());
        assert!(store.categories().is_empty());
        assert_eq!(store.settings().currency, "€");
        assert_eq!(store.settings().theme, Theme::Light);
    }

    #[test]
    fn test_unreadable_slot_is_persistence_error() {
        let slot = MemorySlot::with_contents("budgetAppData", "definitely not json");
        let err = LedgerStore::open(slot).err().unwrap();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let fail = Rc::new(RefCell::new(false));
        let slot = FlakySlot {
            inner: MemorySlot::new("budgetAppData"),
            fail: Rc::clone(&fail),
        };
        let mut store = LedgerStore::open(slot).unwrap();
        store.add_income("Salary", "2500").unwrap();
        let before = store.state().clone();

        *fail.borrow_mut() = true;
        assert!(store.add_income("Bonus", "500").unwrap_err().is_persistence());
        assert!(store.add_category("Food", "100").unwrap_err().is_persistence());
        assert!(store.update_currency("€").unwrap_err().is_persistence());
        assert!(store.clear_all_data().unwrap_err().is_persistence());
        assert!(store
            .import_state(r#"{"income": []}"#)
            .unwrap_err()
            .is_persistence());

        assert_eq!(store.state(), &before);
        let on_disk: LedgerState =
            serde_json::from_str(store.slot().inner.contents().unwrap()).unwrap();
        assert_eq!(on_disk, before);

        *fail.borrow_mut() = false;
        store.add_income("Bonus", "500").unwrap();
        assert_eq!(store.total_income().cents(), 300000);
    }

    #[test]
    fn test_file_backed_store_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("budgetAppData.json");

        let (income_id, category_id) = {
            let mut store = LedgerStore::open(FileSlot::new("budgetAppData", path.clone())).unwrap();
            let txn = store.add_income("Salary", "2500").unwrap();
            let cat = store.add_category("Food", "300").unwrap();
            store.update_theme(Theme::Dark).unwrap();
            (txn.id, cat.id)
        };

        let store = LedgerStore::open(FileSlot::new("budgetAppData", path)).unwrap();
        assert!(store.find_transaction(TransactionKind::Income, income_id).is_some());
        assert!(store.find_category(category_id).is_some());
        assert_eq!(store.settings().theme, Theme::Dark);
        assert_eq!(store.total_income().cents(), 250000);
    }

    #[test]
    fn test_custom_rules_are_applied() {
        let rules = ValidationRules {
            max_amount: Money::from_cents(10_000),
            max_description_length: 5,
            ..ValidationRules::default()
        };
        let mut store = LedgerStore::open_with_rules(MemorySlot::new("s"), rules).unwrap();

        assert!(store.add_expense("Rent", "100.01").unwrap_err().is_validation());
        assert!(store.add_expense("Groceries", "10").unwrap_err().is_validation());
        assert!(store.add_expense("Rent", "100").is_ok());
    }
}
