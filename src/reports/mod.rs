//! Reports over the ledger
//!
//! - category spending and the spending chart data
//! - budget alerts
//! - profit/loss
//! - monthly summary
//! - dashboard overview

pub mod budget_alerts;
pub mod dashboard;
pub mod monthly;
pub mod profit_loss;
pub mod spending;

pub use budget_alerts::{
    check_budget_alerts, format_budget_alerts, format_budget_limits, BudgetAlert,
};
pub use dashboard::Dashboard;
pub use monthly::{MonthTotals, MonthlySummary};
pub use profit_loss::ProfitLoss;
pub use spending::{category_spending, SpendingReport, SpendingRow};
