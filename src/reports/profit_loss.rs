//! Profit and loss over a period

use crate::display::{format_money_colored, period_label, separator};
use crate::models::{Money, Month, Transaction, TransactionKind};

/// Income versus expenses for one month or all time
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLoss {
    pub month: Option<Month>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    /// Net profit as a percentage of income; 0 when there is no income
    pub profit_margin: f64,
    pub is_profitable: bool,
}

impl ProfitLoss {
    pub fn calculate(transactions: &[Transaction], month: Option<Month>) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in transactions.iter().filter(|t| t.in_month(month)) {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => total_expenses += txn.amount,
            }
        }

        let net_profit = total_income - total_expenses;
        let profit_margin = if total_income.is_positive() {
            net_profit.as_f64() / total_income.as_f64() * 100.0
        } else {
            0.0
        };

        Self {
            month,
            total_income,
            total_expenses,
            net_profit,
            profit_margin,
            is_profitable: net_profit.is_positive(),
        }
    }

    /// Format the analysis for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Profit/Loss Analysis - {}\n",
            period_label(self.month)
        ));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<18}{}\n",
            "Total Income:",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<18}{}\n",
            "Total Expenses:",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<18}{}\n",
            "Net Profit/Loss:",
            format_money_colored(self.net_profit, symbol)
        ));
        output.push_str(&format!("{:<18}{:.2}%\n", "Profit Margin:", self.profit_margin));
        output.push('\n');

        if self.is_profitable {
            output.push_str("PROFITABLE! Your finances are in good shape!\n");
        } else {
            output.push_str("RUNNING AT LOSS! Consider reducing expenses or increasing income.\n");
        }

        output
    }
}
