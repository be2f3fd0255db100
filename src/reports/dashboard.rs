//! At-a-glance overview
//!
//! All-time income, expenses and net, the number of categories over budget,
//! and the most recent transactions.

use crate::display::{
    double_separator, format_header, format_money_colored, format_transaction_table,
};
use crate::models::Transaction;
use crate::services::Ledger;

use super::budget_alerts::BudgetAlert;
use super::profit_loss::ProfitLoss;

/// Dashboard figures
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profit_loss: ProfitLoss,
    pub alerts: Vec<BudgetAlert>,
    /// Newest first
    pub recent: Vec<Transaction>,
}

impl Dashboard {
    pub fn generate(ledger: &Ledger, recent_count: usize) -> Self {
        Self {
            profit_loss: ledger.calculate_profit_loss(None),
            alerts: ledger.check_budget_alerts(None),
            recent: ledger
                .recent_transactions(recent_count)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format_header("Dashboard", 40));
        output.push('\n');
        output.push_str(&double_separator(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:    {}\n",
            self.profit_loss.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses:  {}\n",
            self.profit_loss.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Profit:      {}\n",
            format_money_colored(self.profit_loss.net_profit, symbol)
        ));
        output.push_str(&format!("Budget Alerts:   {}\n", self.alert_count()));
        output.push('\n');
        output.push_str("Recent Transactions\n");
        output.push_str(&format_transaction_table(&self.recent, symbol));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::NewTransaction;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_generate() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        ledger.set_budget_limit("Food", Money::from_units(100)).unwrap();
        for (day, units) in [(1, 60), (2, 70), (3, 80)] {
            ledger
                .add_transaction(
                    NewTransaction::expense(Money::from_units(units), "Food", "Meal")
                        .on(NaiveDate::from_ymd_opt(2025, 1, day).unwrap()),
                )
                .unwrap();
        }

        let dashboard = Dashboard::generate(&ledger, 2);
        assert_eq!(dashboard.alert_count(), 1);
        assert_eq!(dashboard.recent.len(), 2);
        assert_eq!(dashboard.recent[0].amount, Money::from_units(80));
        assert_eq!(dashboard.profit_loss.total_expenses, Money::from_units(210));

        let text = dashboard.format_terminal("$");
        assert!(text.contains("Budget Alerts:   1"));
        assert!(text.contains("$210.00"));
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::open(MemoryStore::new()).unwrap();
        let dashboard = Dashboard::generate(&ledger, 10);
        assert_eq!(dashboard.alert_count(), 0);
        assert!(dashboard.format_terminal("$").contains("No transactions found."));
    }
}
