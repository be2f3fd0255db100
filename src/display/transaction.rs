//! Transaction display formatting
//!
//! Renders transaction lists as tables and single transactions as a detail
//! block.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::models::Transaction;

use super::report::truncate;

#[derive(Debug, Clone, Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.to_string(),
            amount: txn.amount.format_with_symbol(symbol),
            category: truncate(&txn.category, 20),
            description: truncate(&txn.description, 32),
            tags: truncate(&txn.tags.join(", "), 28),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table<'a, I>(transactions: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<TransactionRow> = transactions
        .into_iter()
        .map(|txn| TransactionRow::from_transaction(txn, symbol))
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: #{}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    if !txn.tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", txn.tags.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::new(4),
            TransactionKind::Expense,
            Money::from_units(75),
            "Food",
            "Restaurant dinner",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            vec!["dining".into(), "restaurant".into()],
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(std::iter::empty::<&Transaction>(), "$"),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_table_contains_fields() {
        let txn = sample();
        let table = format_transaction_table([&txn], "$");
        assert!(table.contains("Restaurant dinner"));
        assert!(table.contains("$75.00"));
        assert!(table.contains("dining, restaurant"));
        assert!(table.contains("Expense"));
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&sample(), "€");
        assert!(details.contains("Transaction: #4"));
        assert!(details.contains("Amount:      €75.00"));
        assert!(details.contains("Tags:        dining, restaurant"));
    }
}
