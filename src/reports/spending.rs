//! Spending by category
//!
//! Category totals count expense transactions only. A category with no
//! expense in the selected month is absent from the result rather than zero.

use std::collections::BTreeMap;

use crate::display::{format_bar, format_percentage, period_label, separator, truncate};
use crate::models::{Money, Month, Transaction, TransactionKind};

/// Sum expense amounts per category, optionally within one month
pub fn category_spending(
    transactions: &[Transaction],
    month: Option<Month>,
) -> BTreeMap<String, Money> {
    let mut spending: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.in_month(month)) {
        match txn.kind {
            TransactionKind::Expense => {
                *spending.entry(txn.category.clone()).or_default() += txn.amount;
            }
            TransactionKind::Income => {}
        }
    }

    spending
}

/// One category in the spending report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingRow {
    pub category: String,
    pub amount: Money,
    /// Share of the report total, 0 to 100
    pub percentage: f64,
}

/// Data behind the spending chart
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub month: Option<Month>,
    /// Largest spend first
    pub rows: Vec<SpendingRow>,
    pub total: Money,
}

impl SpendingReport {
    /// Build the report, or `None` when there is no spending to show
    pub fn generate(transactions: &[Transaction], month: Option<Month>) -> Option<Self> {
        let spending = category_spending(transactions, month);
        if spending.is_empty() {
            return None;
        }

        let total: Money = spending.values().copied().sum();
        let mut rows: Vec<SpendingRow> = spending
            .into_iter()
            .map(|(category, amount)| SpendingRow {
                percentage: if total.is_positive() {
                    amount.as_f64() / total.as_f64() * 100.0
                } else {
                    0.0
                },
                category,
                amount,
            })
            .collect();

        rows.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));

        Some(Self { month, rows, total })
    }

    /// Format the report as a bar chart for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let width = 72;

        output.push_str(&format!("Spending by Category - {}\n", period_label(self.month)));
        output.push_str(&separator(width));
        output.push('\n');

        let max = self
            .rows
            .first()
            .map(|r| r.amount.as_f64())
            .unwrap_or_default();

        for row in &self.rows {
            output.push_str(&format!(
                "{:<18} {:>12} {:>6}  {}\n",
                truncate(&row.category, 18),
                row.amount.format_with_symbol(symbol),
                format_percentage(row.percentage),
                format_bar(row.amount.as_f64(), max, 30)
            ));
        }

        output.push_str(&separator(width));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>12}\n",
            "Total",
            self.total.format_with_symbol(symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::NaiveDate;

    fn txn(
        id: u64,
        kind: TransactionKind,
        units: i64,
        category: &str,
        date: (i32, u32, u32),
    ) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            kind,
            Money::from_units(units),
            category,
            "test",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Vec::new(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, TransactionKind::Income, 5000, "Salary", (2025, 1, 1)),
            txn(2, TransactionKind::Income, 500, "Freelance", (2025, 1, 2)),
            txn(3, TransactionKind::Expense, 150, "Food", (2025, 1, 3)),
            txn(4, TransactionKind::Expense, 75, "Food", (2025, 1, 4)),
            txn(5, TransactionKind::Expense, 50, "Transport", (2025, 1, 5)),
        ]
    }

    #[test]
    fn test_category_spending_all_time() {
        let spending = category_spending(&sample(), None);
        assert_eq!(spending.len(), 2);
        assert_eq!(spending["Food"], Money::from_units(225));
        assert_eq!(spending["Transport"], Money::from_units(50));
    }

    #[test]
    fn test_income_never_counts_as_spending() {
        let mut txns = sample();
        txns.push(txn(6, TransactionKind::Income, 40, "Food", (2025, 1, 6)));
        let spending = category_spending(&txns, None);
        assert_eq!(spending["Food"], Money::from_units(225));
        assert!(!spending.contains_key("Salary"));
    }

    #[test]
    fn test_month_filter() {
        let mut txns = sample();
        txns.push(txn(6, TransactionKind::Expense, 20, "Food", (2025, 2, 1)));
        txns.push(txn(7, TransactionKind::Expense, 10, "Books", (2024, 2, 1)));

        let feb = category_spending(&txns, Month::new(2025, 2));
        assert_eq!(feb.len(), 1);
        assert_eq!(feb["Food"], Money::from_units(20));

        let march = category_spending(&txns, Month::new(2025, 3));
        assert!(march.is_empty());
    }

    #[test]
    fn test_report_is_none_without_spending() {
        let income_only = vec![txn(1, TransactionKind::Income, 100, "Salary", (2025, 1, 1))];
        assert!(SpendingReport::generate(&income_only, None).is_none());
        assert!(SpendingReport::generate(&[], None).is_none());
    }

    #[test]
    fn test_report_rows_and_shares() {
        let report = SpendingReport::generate(&sample(), None).unwrap();
        assert_eq!(report.total, Money::from_units(275));
        assert_eq!(report.rows[0].category, "Food");
        assert_eq!(report.rows[1].category, "Transport");

        let share_sum: f64 = report.rows.iter().map(|r| r.percentage).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_terminal() {
        let report = SpendingReport::generate(&sample(), None).unwrap();
        let text = report.format_terminal("$");
        assert!(text.contains("Spending by Category - All Time"));
        assert!(text.contains("$225.00"));
        assert!(text.contains("$275.00"));
    }
}
