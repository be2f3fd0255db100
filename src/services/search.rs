//! Transaction search
//!
//! Matching is a case-insensitive substring test. Results keep ledger order
//! and each transaction appears at most once.

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;
use crate::models::Transaction;

/// Which fields a search query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Description or any tag
    #[default]
    All,
    Description,
    Tags,
}

impl SearchMode {
    /// Check one transaction against an already-lowercased query
    pub fn matches(&self, txn: &Transaction, query_lower: &str) -> bool {
        match self {
            Self::All => txn.description_contains(query_lower) || txn.any_tag_contains(query_lower),
            Self::Description => txn.description_contains(query_lower),
            Self::Tags => txn.any_tag_contains(query_lower),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Description => write!(f, "description"),
            Self::Tags => write!(f, "tags"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "description" | "desc" => Ok(Self::Description),
            "tags" | "tag" => Ok(Self::Tags),
            other => Err(TrackerError::Validation(format!(
                "Unknown search mode '{}': expected all, description or tags",
                other
            ))),
        }
    }
}

/// Find transactions matching `query` in the fields selected by `mode`
pub fn search_transactions<'a>(
    transactions: &'a [Transaction],
    query: &str,
    mode: SearchMode,
) -> Vec<&'a Transaction> {
    let query_lower = query.to_lowercase();
    transactions
        .iter()
        .filter(|txn| mode.matches(txn, &query_lower))
        .collect()
}
