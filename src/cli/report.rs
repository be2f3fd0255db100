//! CLI commands for reports
//!
//! Spending by category, profit/loss, and the month-by-month summary.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::period_label;
use crate::error::TrackerResult;
use crate::services::Ledger;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Expense totals per category with a bar chart
    Spending {
        /// Month to report on (YYYY-MM), all time if omitted
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Income, expenses, net profit and margin
    #[command(alias = "pl")]
    Profit {
        /// Month to report on (YYYY-MM), all time if omitted
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Income and expenses for every month with activity
    Monthly,
}

/// Handle report commands
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Spending { month } => {
            let month = parse_month(month.as_deref())?;
            match ledger.spending_report(month) {
                Some(report) => print!("{}", report.format_terminal(symbol)),
                None => println!("No expenses recorded for {}.", period_label(month)),
            }
        }
        ReportCommands::Profit { month } => {
            let month = parse_month(month.as_deref())?;
            print!("{}", ledger.calculate_profit_loss(month).format_terminal(symbol));
        }
        ReportCommands::Monthly => {
            print!("{}", ledger.monthly_summary().format_terminal(symbol));
        }
    }

    Ok(())
}
