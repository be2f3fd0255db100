//! Suggested categories
//!
//! Categories are free-form strings; these presets are what the entry form
//! offers for each transaction kind.

use super::transaction::TransactionKind;

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Business",
    "Investment",
    "Freelance",
    "Other Income",
];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Education",
    "Other",
];

/// The preset category list for a kind
pub fn suggested_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Check if a category is one of the presets for a kind (case-insensitive)
pub fn is_suggested(kind: TransactionKind, category: &str) -> bool {
    suggested_categories(kind)
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_categories() {
        assert_eq!(suggested_categories(TransactionKind::Income)[0], "Salary");
        assert_eq!(suggested_categories(TransactionKind::Expense).len(), 8);
    }

    #[test]
    fn test_is_suggested() {
        assert!(is_suggested(TransactionKind::Expense, "food"));
        assert!(!is_suggested(TransactionKind::Income, "Food"));
        assert!(!is_suggested(TransactionKind::Expense, "Rent"));
    }
}
