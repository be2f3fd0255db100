//! Budget limit checks
//!
//! A category alerts only when its spending is strictly above its limit.
//! Categories without a limit never alert.

use crate::display::{period_label, separator};
use crate::models::{BudgetLimits, Money, Month, Transaction};

use super::spending::category_spending;

/// A category whose spending went over its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    pub exceeded_by: Money,
}

/// Compare spending against every configured limit
///
/// Alerts come back in the order the limits were first set.
pub fn check_budget_alerts(
    transactions: &[Transaction],
    limits: &BudgetLimits,
    month: Option<Month>,
) -> Vec<BudgetAlert> {
    if limits.is_empty() {
        return Vec::new();
    }

    let spending = category_spending(transactions, month);

    limits
        .iter()
        .filter_map(|(category, limit)| {
            let spent = spending.get(category).copied().unwrap_or_default();
            (spent > limit).then(|| BudgetAlert {
                category: category.to_string(),
                limit,
                spent,
                exceeded_by: spent - limit,
            })
        })
        .collect()
}

/// Format alerts for terminal display
pub fn format_budget_alerts(alerts: &[BudgetAlert], month: Option<Month>, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget Alerts - {}\n", period_label(month)));
    output.push_str(&separator(40));
    output.push('\n');

    if alerts.is_empty() {
        output.push_str("All budgets are within limits!\n");
        return output;
    }

    for alert in alerts {
        output.push_str(&format!("BUDGET EXCEEDED: {}\n", alert.category));
        output.push_str(&format!(
            "   Limit:       {}\n",
            alert.limit.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "   Spent:       {}\n",
            alert.spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "   Exceeded by: {}\n\n",
            alert.exceeded_by.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format configured limits alongside current spending
pub fn format_budget_limits(
    transactions: &[Transaction],
    limits: &BudgetLimits,
    month: Option<Month>,
    symbol: &str,
) -> String {
    if limits.is_empty() {
        return "No budget limits set.\n".to_string();
    }

    let spending = category_spending(transactions, month);
    let mut output = String::new();

    output.push_str(&format!("Budget Limits - {}\n", period_label(month)));
    output.push_str(&format!(
        "{:<20} {:>12} {:>12} {:>12}\n",
        "Category", "Limit", "Spent", "Remaining"
    ));
    output.push_str(&separator(59));
    output.push('\n');

    for (category, limit) in limits.iter() {
        let spent = spending.get(category).copied().unwrap_or_default();
        let remaining = limit - spent;
        let marker = if spent > limit { " !" } else { "" };
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}{}\n",
            category,
            limit.format_with_symbol(symbol),
            spent.format_with_symbol(symbol),
            remaining.format_with_symbol(symbol),
            marker
        ));
    }

    output
}
