//! Expense Tracker - income and expense ledger with category budgets
//!
//! This library keeps a ledger of income and expense transactions and
//! per-category monthly spending limits, persisted as a single JSON document,
//! and computes the reports a household or small business needs: spending
//! per category, budget overruns, profit/loss and a month-by-month summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, money, months, budget limits)
//! - `storage`: The ledger document and its backends
//! - `services`: The ledger, search and demo data
//! - `reports`: Aggregations over the ledger
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::models::Money;
//! use expense_tracker::services::{Ledger, NewTransaction};
//!
//! # fn main() -> expense_tracker::TrackerResult<()> {
//! let paths = TrackerPaths::new()?;
//! let mut ledger = Ledger::open_file(paths.ledger_file())?;
//! ledger.add_transaction(NewTransaction::expense(Money::from_units(12), "Food", "Lunch"))?;
//! println!("{:?}", ledger.category_spending(None));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
