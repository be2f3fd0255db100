//! Demo data
//!
//! Replaces the ledger contents with a small example set: three budget
//! limits and seven transactions dated today.

use chrono::NaiveDate;
use tracing::info;

use crate::error::TrackerResult;
use crate::models::{Money, Transaction, TransactionId};
use crate::storage::LedgerDocument;

use super::ledger::{Ledger, NewTransaction};

const DEMO_LIMITS: &[(&str, i64)] = &[
    ("Food", 300),
    ("Transport", 150),
    ("Entertainment", 200),
];

fn demo_transactions() -> Vec<NewTransaction> {
    vec![
        NewTransaction::income(Money::from_units(5000), "Salary", "Monthly salary")
            .tags(["salary", "work"]),
        NewTransaction::income(Money::from_units(500), "Freelance", "Web development project")
            .tags(["freelance", "programming"]),
        NewTransaction::expense(Money::from_units(150), "Food", "Groceries")
            .tags(["groceries", "supermarket"]),
        NewTransaction::expense(Money::from_units(75), "Food", "Restaurant dinner")
            .tags(["dining", "restaurant"]),
        NewTransaction::expense(Money::from_units(50), "Transport", "Gas").tags(["car", "fuel"]),
        NewTransaction::expense(Money::from_units(100), "Entertainment", "Movie night")
            .tags(["movies", "fun"]),
        NewTransaction::expense(Money::from_units(80), "Shopping", "New clothes")
            .tags(["clothing", "fashion"]),
    ]
}

/// The demo ledger: every transaction dated `today`, ids from 1
pub fn demo_document(today: NaiveDate) -> LedgerDocument {
    let mut document = LedgerDocument::default();

    for (category, units) in DEMO_LIMITS {
        document.budget_limits.set(*category, Money::from_units(*units));
    }

    let mut id = TransactionId::FIRST;
    for input in demo_transactions() {
        document.transactions.push(Transaction::new(
            id,
            input.kind,
            input.amount,
            input.category,
            input.description,
            input.date.unwrap_or(today),
            input.tags,
        ));
        id = TransactionId::new(id.get() + 1);
    }

    document
}

/// Replace the ledger contents with the demo set in a single save
pub fn seed_demo_data(ledger: &mut Ledger) -> TrackerResult<()> {
    ledger.replace(demo_document(chrono::Local::now().date_naive()))?;

    info!(
        transactions = ledger.len(),
        budget_limits = ledger.budget_limits().len(),
        "loaded demo data"
    );
    Ok(())
}
