//! Month-by-month income and expense totals

use std::collections::BTreeMap;

use crate::display::separator;
use crate::models::{Money, Month, Transaction, TransactionKind};

/// Income and expense totals for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub income: Money,
    pub expenses: Money,
}

impl MonthTotals {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Totals for every month that has at least one transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Oldest month first
    pub months: BTreeMap<Month, MonthTotals>,
}

impl MonthlySummary {
    /// One pass over all transactions, no filtering
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut months: BTreeMap<Month, MonthTotals> = BTreeMap::new();

        for txn in transactions {
            let totals = months.entry(txn.month()).or_default();
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expenses += txn.amount,
            }
        }

        Self { months }
    }

    pub fn get(&self, month: Month) -> Option<MonthTotals> {
        self.months.get(&month).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format as a table, newest month first
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.months.is_empty() {
            return "No transactions recorded yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&separator(53));
        output.push('\n');

        for (month, totals) in self.months.iter().rev() {
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14}\n",
                month.to_string(),
                totals.income.format_with_symbol(symbol),
                totals.expenses.format_with_symbol(symbol),
                totals.net().format_with_symbol(symbol)
            ));
        }

        output
    }
}
