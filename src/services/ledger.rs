//! The ledger: transactions, budget limits, and the queries over them
//!
//! Every command stages its change on a copy of the document, saves the
//! copy, and only then replaces the in-memory state. A failed save therefore
//! leaves both the store and the ledger as they were.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    BudgetLimits, Money, Month, Transaction, TransactionId, TransactionKind,
};
use crate::reports::{
    budget_alerts, spending, BudgetAlert, MonthlySummary, ProfitLoss, SpendingReport,
};
use crate::storage::{JsonFileStore, LedgerDocument, LedgerStore};

use super::search::{search_transactions, SearchMode};

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Defaults to today when not set
    pub date: Option<NaiveDate>,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            tags: Vec::new(),
            date: None,
        }
    }

    pub fn income(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Income, amount, category, description)
    }

    pub fn expense(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Expense, amount, category, description)
    }

    /// Attach tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Record on a specific day instead of today
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// In-memory ledger backed by a [`LedgerStore`]
pub struct Ledger {
    store: Box<dyn LedgerStore>,
    state: LedgerDocument,
}

impl Ledger {
    /// Load the ledger from a store; an empty store gives an empty ledger
    pub fn open(store: impl LedgerStore + 'static) -> TrackerResult<Self> {
        let state = store.load()?;
        info!(
            location = %store.location(),
            transactions = state.transactions.len(),
            budget_limits = state.budget_limits.len(),
            "opened ledger"
        );
        Ok(Self {
            store: Box::new(store),
            state,
        })
    }

    /// Load the ledger from a JSON file
    pub fn open_file(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        Self::open(JsonFileStore::new(path))
    }

    /// Where the ledger is persisted
    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Discard in-memory state and load again from the store
    pub fn reload(&mut self) -> TrackerResult<()> {
        self.state = self.store.load()?;
        Ok(())
    }

    /// Write the current state to the store
    pub fn save(&self) -> TrackerResult<()> {
        self.store.save(&self.state)
    }

    pub fn document(&self) -> &LedgerDocument {
        &self.state
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn budget_limits(&self) -> &BudgetLimits {
        &self.state.budget_limits
    }

    pub fn len(&self) -> usize {
        self.state.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.transactions.is_empty()
    }

    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.state.transactions.iter().find(|t| t.id == id)
    }

    pub fn get(&self, id: TransactionId) -> TrackerResult<&Transaction> {
        self.find(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))
    }

    /// The id the next added transaction will receive
    ///
    /// Fails when the document already holds the largest possible id.
    pub fn next_id(&self) -> TrackerResult<TransactionId> {
        TransactionId::next_after(self.state.transactions.iter().map(|t| t.id)).ok_or_else(|| {
            warn!("no transaction ids left");
            TrackerError::Storage("Transaction ids exhausted".into())
        })
    }

    /// Validate, record and persist a new transaction
    pub fn add_transaction(&mut self, input: NewTransaction) -> TrackerResult<Transaction> {
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let txn = Transaction::new(
            self.next_id()?,
            input.kind,
            input.amount,
            input.category,
            input.description,
            date,
            input.tags,
        );

        txn.validate().map_err(|e| {
            warn!(error = %e, "rejected transaction");
            TrackerError::Validation(e.to_string())
        })?;

        let created = txn.clone();
        self.commit(move |doc| doc.transactions.push(txn))?;

        info!(
            id = %created.id,
            kind = created.kind.as_str(),
            amount = %created.amount,
            category = %created.category,
            "added transaction"
        );
        Ok(created)
    }

    /// Set or replace the monthly limit for a category, returning the old one
    pub fn set_budget_limit(
        &mut self,
        category: &str,
        limit: Money,
    ) -> TrackerResult<Option<Money>> {
        BudgetLimits::validate(category, limit).map_err(|e| {
            warn!(error = %e, "rejected budget limit");
            TrackerError::Validation(e.to_string())
        })?;

        let category = category.trim().to_string();
        let previous = self.commit(|doc| doc.budget_limits.set(category.clone(), limit))?;

        info!(category = %category, limit = %limit, "set budget limit");
        Ok(previous)
    }

    /// Remove every transaction with this id; missing ids are not an error
    pub fn delete_transaction(&mut self, id: TransactionId) -> TrackerResult<bool> {
        let removed = self.commit(|doc| {
            let before = doc.transactions.len();
            doc.transactions.retain(|t| t.id != id);
            before != doc.transactions.len()
        })?;

        if removed {
            info!(id = %id, "deleted transaction");
        } else {
            debug!(id = %id, "delete requested for unknown transaction");
        }
        Ok(removed)
    }

    /// Remove all transactions and budget limits
    pub fn clear(&mut self) -> TrackerResult<()> {
        self.replace(LedgerDocument::default())?;
        info!("cleared ledger");
        Ok(())
    }

    /// Swap in a whole new document with a single save
    ///
    /// Every transaction and limit is validated first and ids must be
    /// unique, so either the full document is stored or nothing changes.
    pub fn replace(&mut self, document: LedgerDocument) -> TrackerResult<()> {
        let mut seen = BTreeSet::new();
        for txn in &document.transactions {
            txn.validate().map_err(|e| {
                warn!(id = %txn.id, error = %e, "rejected replacement document");
                TrackerError::Validation(format!("Transaction #{}: {}", txn.id, e))
            })?;
            if !seen.insert(txn.id) {
                return Err(TrackerError::Validation(format!(
                    "Duplicate transaction id #{}",
                    txn.id
                )));
            }
        }
        for (category, limit) in document.budget_limits.iter() {
            BudgetLimits::validate(category, limit).map_err(|e| {
                warn!(category = %category, error = %e, "rejected replacement document");
                TrackerError::Validation(e.to_string())
            })?;
        }

        let transactions = document.transactions.len();
        let budget_limits = document.budget_limits.len();
        self.commit(move |doc| *doc = document)?;
        info!(transactions, budget_limits, "replaced ledger contents");
        Ok(())
    }

    /// Expense totals per category, optionally within one month
    pub fn category_spending(&self, month: Option<Month>) -> BTreeMap<String, Money> {
        spending::category_spending(self.transactions(), month)
    }

    /// Categories whose spending is over their limit
    pub fn check_budget_alerts(&self, month: Option<Month>) -> Vec<BudgetAlert> {
        budget_alerts::check_budget_alerts(self.transactions(), self.budget_limits(), month)
    }

    pub fn calculate_profit_loss(&self, month: Option<Month>) -> ProfitLoss {
        ProfitLoss::calculate(self.transactions(), month)
    }

    pub fn monthly_summary(&self) -> MonthlySummary {
        MonthlySummary::generate(self.transactions())
    }

    pub fn search_transactions(&self, query: &str, mode: SearchMode) -> Vec<&Transaction> {
        search_transactions(self.transactions(), query, mode)
    }

    /// Chart data for spending, `None` when there is nothing to chart
    pub fn spending_report(&self, month: Option<Month>) -> Option<SpendingReport> {
        SpendingReport::generate(self.transactions(), month)
    }

    /// Distinct months that have transactions, newest first
    pub fn available_months(&self) -> Vec<Month> {
        let months: BTreeSet<Month> = self.transactions().iter().map(|t| t.month()).collect();
        months.into_iter().rev().collect()
    }

    /// All transactions, newest date first (ties keep insertion order)
    pub fn transactions_newest_first(&self) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.transactions().iter().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    /// The `count` most recent transactions by date
    pub fn recent_transactions(&self, count: usize) -> Vec<&Transaction> {
        let mut transactions = self.transactions_newest_first();
        transactions.truncate(count);
        transactions
    }

    fn commit<F, R>(&mut self, mutate: F) -> TrackerResult<R>
    where
        F: FnOnce(&mut LedgerDocument) -> R,
    {
        let mut staged = self.state.clone();
        let result = mutate(&mut staged);

        if let Err(e) = self.store.save(&staged) {
            warn!(
                location = %self.store.location(),
                error = %e,
                "save failed, change discarded"
            );
            return Err(e);
        }

        self.state = staged;
        Ok(result)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("location", &self.store.location())
            .field("transactions", &self.state.transactions.len())
            .field("budget_limits", &self.state.budget_limits.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn memory_ledger() -> (Rc<MemoryStore>, Ledger) {
        let store = Rc::new(MemoryStore::new());
        let ledger = Ledger::open(Rc::clone(&store)).unwrap();
        (store, ledger)
    }

    fn add_example(ledger: &mut Ledger) {
        let entries = [
            NewTransaction::income(Money::from_units(5000), "Salary", "Monthly salary").on(day(1)),
            NewTransaction::income(Money::from_units(500), "Freelance", "Web project").on(day(2)),
            NewTransaction::expense(Money::from_units(150), "Food", "Groceries").on(day(3)),
            NewTransaction::expense(Money::from_units(75), "Food", "Restaurant dinner")
                .tags(["dining", "restaurant"])
                .on(day(4)),
            NewTransaction::expense(Money::from_units(50), "Transport", "Gas").on(day(5)),
        ];
        for entry in entries {
            ledger.add_transaction(entry).unwrap();
        }
    }

    #[test]
    fn test_ids_increase_from_one() {
        let (_store, mut ledger) = memory_ledger();
        let mut previous = TransactionId::new(0);
        for i in 0..5 {
            let txn = ledger
                .add_transaction(NewTransaction::expense(Money::from_units(i + 1), "Food", "Snack"))
                .unwrap();
            assert!(txn.id > previous);
            previous = txn.id;
        }
        assert_eq!(previous, TransactionId::new(5));
    }

    #[test]
    fn test_ids_follow_max_after_delete() {
        let (_store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        ledger.delete_transaction(TransactionId::new(2)).unwrap();
        let txn = ledger
            .add_transaction(NewTransaction::expense(Money::from_units(1), "Food", "Gum"))
            .unwrap();
        assert_eq!(txn.id, TransactionId::new(6));

        ledger.delete_transaction(TransactionId::new(6)).unwrap();
        assert_eq!(ledger.next_id().unwrap(), TransactionId::new(6));
    }

    #[test]
    fn test_add_defaults_to_today() {
        let (_store, mut ledger) = memory_ledger();
        let before = chrono::Local::now().date_naive();
        let txn = ledger
            .add_transaction(NewTransaction::expense(Money::from_units(5), "Food", "Coffee"))
            .unwrap();
        let after = chrono::Local::now().date_naive();
        assert!(txn.date >= before && txn.date <= after);
    }

    #[test]
    fn test_every_mutation_persists() {
        let (store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        assert_eq!(store.save_count(), 5);

        ledger.set_budget_limit("Food", Money::from_units(300)).unwrap();
        assert_eq!(store.save_count(), 6);

        ledger.delete_transaction(TransactionId::new(99)).unwrap();
        assert_eq!(store.save_count(), 7);
        assert_eq!(store.document(), *ledger.document());
    }

    #[test]
    fn test_validation_rejects_bad_input() {
        let (store, mut ledger) = memory_ledger();

        let err = ledger
            .add_transaction(NewTransaction::expense(Money::zero(), "Food", "Nothing"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger
            .add_transaction(NewTransaction::expense(Money::from_units(-5), "Food", "Refund"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger
            .add_transaction(NewTransaction::expense(Money::from_units(5), "  ", "Lunch"))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger
            .add_transaction(NewTransaction::income(Money::from_units(5), "Salary", ""))
            .unwrap_err();
        assert!(err.is_validation());

        let err = ledger.set_budget_limit("Food", Money::zero()).unwrap_err();
        assert!(err.is_validation());

        let err = ledger.set_budget_limit("", Money::from_units(10)).unwrap_err();
        assert!(err.is_validation());

        assert!(ledger.is_empty());
        assert!(ledger.budget_limits().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let (store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        store.fail_saves(true);

        let err = ledger
            .add_transaction(NewTransaction::expense(Money::from_units(100), "Food", "Takeaway"))
            .unwrap_err();
        assert!(err.is_storage());
        assert_eq!(ledger.len(), 5);

        assert!(ledger.set_budget_limit("Food", Money::from_units(300)).is_err());
        assert!(ledger.budget_limits().is_empty());

        assert!(ledger.delete_transaction(TransactionId::new(1)).is_err());
        assert!(ledger.find(TransactionId::new(1)).is_some());

        assert_eq!(store.document(), *ledger.document());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_store, mut ledger) = memory_ledger();
        add_example(&mut ledger);

        assert!(ledger.delete_transaction(TransactionId::new(3)).unwrap());
        assert!(!ledger.delete_transaction(TransactionId::new(3)).unwrap());
        assert_eq!(ledger.len(), 4);
        assert!(ledger.find(TransactionId::new(3)).is_none());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_store, ledger) = memory_ledger();
        assert!(ledger.get(TransactionId::new(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_example_aggregates() {
        let (_store, mut ledger) = memory_ledger();
        add_example(&mut ledger);

        let spending = ledger.category_spending(None);
        assert_eq!(spending.len(), 2);
        assert_eq!(spending["Food"], Money::from_units(225));
        assert_eq!(spending["Transport"], Money::from_units(50));

        let pl = ledger.calculate_profit_loss(None);
        assert_eq!(pl.total_income, Money::from_units(5500));
        assert_eq!(pl.total_expenses, Money::from_units(275));
        assert_eq!(pl.net_profit, Money::from_units(5225));
        assert!((pl.profit_margin - 95.0).abs() < 1e-6);
        assert!(pl.is_profitable);
    }

    #[test]
    fn test_budget_alert_example() {
        let (_store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        ledger.set_budget_limit("Food", Money::from_units(300)).unwrap();

        assert!(ledger.check_budget_alerts(None).is_empty());

        let takeaway =
            NewTransaction::expense(Money::from_units(100), "Food", "Takeaway").on(day(6));
        ledger.add_transaction(takeaway).unwrap();

        let alerts = ledger.check_budget_alerts(None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, "Food");
        assert_eq!(alerts[0].limit, Money::from_units(300));
        assert_eq!(alerts[0].spent, Money::from_units(325));
        assert_eq!(alerts[0].exceeded_by, Money::from_units(25));
    }

    #[test]
    fn test_set_budget_limit_overwrites() {
        let (_store, mut ledger) = memory_ledger();
        assert_eq!(ledger.set_budget_limit(" Food ", Money::from_units(300)).unwrap(), None);
        assert_eq!(
            ledger.set_budget_limit("Food", Money::from_units(200)).unwrap(),
            Some(Money::from_units(300))
        );
        assert_eq!(ledger.budget_limits().len(), 1);
        assert_eq!(ledger.budget_limits().get("Food"), Some(Money::from_units(200)));
    }

    #[test]
    fn test_search_description_excludes_tag_only_match() {
        let (_store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        ledger
            .add_transaction(
                NewTransaction::expense(Money::from_units(20), "Food", "Lunch")
                    .tags(["restaurant"])
                    .on(day(7)),
            )
            .unwrap();

        let by_description = ledger.search_transactions("restaurant", SearchMode::Description);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].description, "Restaurant dinner");

        let by_any = ledger.search_transactions("restaurant", SearchMode::All);
        assert_eq!(by_any.len(), 2);
    }

    #[test]
    fn test_spending_report_absent_without_expenses() {
        let (_store, mut ledger) = memory_ledger();
        assert!(ledger.spending_report(None).is_none());

        ledger
            .add_transaction(NewTransaction::income(Money::from_units(10), "Salary", "Pay"))
            .unwrap();
        assert!(ledger.spending_report(None).is_none());
    }

    #[test]
    fn test_months_and_recent() {
        let (_store, mut ledger) = memory_ledger();
        ledger
            .add_transaction(
                NewTransaction::expense(Money::from_units(1), "Food", "Old")
                    .on(NaiveDate::from_ymd_opt(2024, 11, 5).unwrap()),
            )
            .unwrap();
        add_example(&mut ledger);

        let months: Vec<String> = ledger.available_months().iter().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2025-01", "2024-11"]);

        let recent = ledger.recent_transactions(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].description, "Gas");
        assert_eq!(recent[1].description, "Restaurant dinner");

        let all = ledger.transactions_newest_first();
        assert_eq!(all.last().unwrap().description, "Old");
        assert_eq!(ledger.transactions()[0].description, "Old");
    }

    #[test]
    fn test_open_existing_document() {
        let mut doc = LedgerDocument::default();
        doc.transactions.push(Transaction::new(
            TransactionId::new(7),
            TransactionKind::Income,
            Money::from_units(500),
            "Freelance",
            "Web project",
            day(2),
            Vec::new(),
        ));
        doc.budget_limits.set("Food", Money::from_units(300));
        let store = Rc::new(MemoryStore::with_document(doc));

        let ledger = Ledger::open(Rc::clone(&store)).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.next_id().unwrap(), TransactionId::new(8));
        assert_eq!(ledger.get(TransactionId::new(7)).unwrap().category, "Freelance");

        ledger.save().unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.document(), *ledger.document());
    }

    #[test]
    fn test_clear() {
        let (store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        ledger.set_budget_limit("Food", Money::from_units(300)).unwrap();

        ledger.clear().unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.budget_limits().is_empty());
        assert!(store.document().is_empty());
        assert_eq!(ledger.next_id().unwrap(), TransactionId::FIRST);
    }

    fn document_with(id: u64, amount: Money) -> LedgerDocument {
        let mut doc = LedgerDocument::default();
        doc.transactions.push(Transaction::new(
            TransactionId::new(id),
            TransactionKind::Expense,
            amount,
            "Food",
            "Groceries",
            day(3),
            Vec::new(),
        ));
        doc
    }

    #[test]
    fn test_add_fails_when_ids_exhausted() {
        let doc = document_with(u64::MAX, Money::from_units(10));
        let store = Rc::new(MemoryStore::with_document(doc.clone()));
        let mut ledger = Ledger::open(Rc::clone(&store)).unwrap();

        assert!(ledger.next_id().unwrap_err().is_storage());
        let err = ledger
            .add_transaction(NewTransaction::expense(Money::from_units(5), "Food", "Lunch"))
            .unwrap_err();
        assert!(err.is_storage());
        assert_eq!(*ledger.document(), doc);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_amounts_over_limit_rejected() {
        let (store, mut ledger) = memory_ledger();
        assert!(Money::parse("60000000000000000").is_err());

        let over = Money::MAX + Money::from_cents(1);
        let err = ledger
            .add_transaction(NewTransaction::expense(over, "Food", "Too much"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.set_budget_limit("Food", over).unwrap_err().is_validation());

        ledger
            .add_transaction(NewTransaction::expense(Money::MAX, "Food", "Largest"))
            .unwrap();
        ledger
            .add_transaction(NewTransaction::expense(Money::MAX, "Food", "Largest again"))
            .unwrap();
        let spending = ledger.category_spending(None);
        assert_eq!(spending["Food"], Money::MAX + Money::MAX);
        assert_eq!(ledger.calculate_profit_loss(None).net_profit, -(Money::MAX + Money::MAX));
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_replace_is_one_save() {
        let (store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        let saves = store.save_count();

        let mut doc = document_with(3, Money::from_units(40));
        doc.budget_limits.set("Food", Money::from_units(100));
        ledger.replace(doc.clone()).unwrap();

        assert_eq!(store.save_count(), saves + 1);
        assert_eq!(*ledger.document(), doc);
        assert_eq!(store.document(), doc);
        assert_eq!(ledger.next_id().unwrap(), TransactionId::new(4));
    }

    #[test]
    fn test_replace_validates_before_saving() {
        let (store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        let before = ledger.document().clone();
        let saves = store.save_count();

        let bad_amount = document_with(1, Money::zero());
        assert!(ledger.replace(bad_amount).unwrap_err().is_validation());

        let mut duplicate_ids = document_with(1, Money::from_units(5));
        duplicate_ids.transactions.push(duplicate_ids.transactions[0].clone());
        assert!(ledger.replace(duplicate_ids).unwrap_err().is_validation());

        let mut bad_limit = document_with(1, Money::from_units(5));
        bad_limit.budget_limits.set("Food", Money::zero());
        assert!(ledger.replace(bad_limit).unwrap_err().is_validation());

        assert_eq!(*ledger.document(), before);
        assert_eq!(store.save_count(), saves);
    }

    #[test]
    fn test_failed_replace_keeps_state() {
        let (store, mut ledger) = memory_ledger();
        add_example(&mut ledger);
        let before = ledger.document().clone();

        store.fail_saves(true);
        assert!(ledger.replace(LedgerDocument::default()).unwrap_err().is_storage());
        assert!(ledger.clear().is_err());
        assert_eq!(*ledger.document(), before);
        assert_eq!(store.document(), before);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense_data.json");

        let mut ledger = Ledger::open_file(&path).unwrap();
        assert!(ledger.is_empty());
        add_example(&mut ledger);
        ledger.set_budget_limit("Food", Money::from_units(300)).unwrap();
        ledger.set_budget_limit("Transport", Money::from_cents(15_050)).unwrap();

        let reopened = Ledger::open_file(&path).unwrap();
        assert_eq!(reopened.transactions(), ledger.transactions());
        assert_eq!(reopened.budget_limits(), ledger.budget_limits());
        assert_eq!(reopened.transactions()[3].tags, vec!["dining", "restaurant"]);
    }

    #[test]
    fn test_malformed_file_fails_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense_data.json");
        std::fs::write(&path, "{\"transactions\": [").unwrap();

        let err = Ledger::open_file(&path).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_reload_discards_unsaved_view() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense_data.json");

        let mut first = Ledger::open_file(&path).unwrap();
        let mut second = Ledger::open_file(&path).unwrap();
        first
            .add_transaction(NewTransaction::expense(Money::from_units(9), "Food", "Bagel"))
            .unwrap();

        assert!(second.is_empty());
        second.reload().unwrap();
        assert_eq!(second.len(), 1);
    }
}
