//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, searching and deleting
//! transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::TrackerResult;
use crate::models::category::is_suggested;
use crate::models::parse_tag_list;
use crate::services::{Ledger, NewTransaction, SearchMode};

use super::{parse_amount, parse_date, parse_id, parse_kind, parse_month};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "50" or "12.75"), must be positive
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// What the money was for
        #[arg(short, long)]
        description: String,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only transactions in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Search descriptions and tags
    Search {
        /// Text to look for (case-insensitive)
        query: String,
        /// Fields to search: all, description or tags
        #[arg(long, default_value = "all")]
        mode: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            tags,
            date,
        } => {
            let kind = parse_kind(&kind)?;
            let amount = parse_amount(&amount)?;

            let mut input = NewTransaction::new(kind, amount, category, description);
            if let Some(tags) = tags {
                input = input.tags(parse_tag_list(&tags));
            }
            if let Some(date) = date {
                input = input.on(parse_date(&date)?);
            }

            let txn = ledger.add_transaction(input)?;
            println!(
                "Added {} #{}: {} {} ({})",
                txn.kind.as_str(),
                txn.id,
                txn.amount.format_with_symbol(symbol),
                txn.category,
                txn.description
            );
            if !is_suggested(txn.kind, &txn.category) {
                println!("Note: '{}' is a custom {} category", txn.category, txn.kind.as_str());
            }

            let alerts = ledger.check_budget_alerts(Some(txn.month()));
            if let Some(alert) = alerts.iter().find(|a| a.category == txn.category) {
                println!(
                    "Warning: {} is over its budget for {} by {}",
                    alert.category,
                    txn.month(),
                    alert.exceeded_by.format_with_symbol(symbol)
                );
            }
        }

        TransactionCommands::List { month, limit } => {
            let month = parse_month(month.as_deref())?;
            let matching: Vec<_> = ledger
                .transactions_newest_first()
                .into_iter()
                .filter(|t| t.in_month(month))
                .collect();
            let total = matching.len();

            print!(
                "{}",
                format_transaction_table(matching.into_iter().take(limit), symbol)
            );
            if total > limit {
                println!("Showing {} of {} transactions", limit, total);
            }
        }

        TransactionCommands::Show { id } => {
            let id = parse_id(&id)?;
            let txn = ledger.get(id)?;
            print!("{}", format_transaction_details(txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            if ledger.delete_transaction(id)? {
                println!("Deleted transaction #{}", id);
            } else {
                println!("No transaction #{} to delete", id);
            }
        }

        TransactionCommands::Search { query, mode } => {
            let mode: SearchMode = mode.parse()?;
            let results = ledger.search_transactions(&query, mode);
            println!(
                "{} match(es) for '{}' in {}",
                results.len(),
                query,
                mode
            );
            print!("{}", format_transaction_table(results, symbol));
        }
    }

    Ok(())
}
