//! Budget CLI commands
//!
//! Setting per-category monthly limits and checking spending against them.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::reports::{format_budget_alerts, format_budget_limits};
use crate::services::Ledger;

use super::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set or replace the monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit amount, must be positive
        limit: String,
    },
    /// List limits with spending against each
    List {
        /// Month to compare against (YYYY-MM), all time if omitted
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show categories whose spending is over the limit
    Alerts {
        /// Month to check (YYYY-MM), all time if omitted
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = parse_amount(&limit)?;
            let previous = ledger.set_budget_limit(&category, limit)?;

            match previous {
                Some(old) => println!(
                    "Updated budget for {}: {} -> {}",
                    category.trim(),
                    old.format_with_symbol(symbol),
                    limit.format_with_symbol(symbol)
                ),
                None => println!(
                    "Set budget for {}: {}",
                    category.trim(),
                    limit.format_with_symbol(symbol)
                ),
            }
        }

        BudgetCommands::List { month } => {
            let month = parse_month(month.as_deref())?;
            print!(
                "{}",
                format_budget_limits(ledger.transactions(), ledger.budget_limits(), month, symbol)
            );
        }

        BudgetCommands::Alerts { month } => {
            let month = parse_month(month.as_deref())?;
            let alerts = ledger.check_budget_alerts(month);
            print!("{}", format_budget_alerts(&alerts, month, symbol));
        }
    }

    Ok(())
}
