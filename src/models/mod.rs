//! Core data models for the expense tracker
//!
//! Transactions, their ids and amounts, budget limits, and the calendar month
//! used to filter reports.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetLimits, BudgetValidationError};
pub use category::{suggested_categories, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use transaction::{
    normalize_tags, parse_tag_list, Transaction, TransactionKind, TransactionValidationError,
    UnknownKindError,
};
