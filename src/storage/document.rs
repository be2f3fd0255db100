//! The persisted ledger document
//!
//! ```json
//! {
//!   "transactions": [ {"id": 1, "type": "income", "amount": 5000, ...} ],
//!   "budget_limits": { "Food": 300 }
//! }
//! ```
//!
//! Either key may be missing; it then loads as an empty collection.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetLimits, Transaction};

/// Everything the ledger persists, written as one JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    /// In insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budget_limits: BudgetLimits,
}

impl LedgerDocument {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budget_limits.is_empty()
    }
}
