//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Month, TransactionId, TransactionKind};

/// Parse a user-typed amount such as "12.50" or "$1,200"
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount '{}'. Use a format like '50' or '12.75'. Error: {}",
            input, e
        ))
    })
}

/// Parse "income" or "expense"
pub fn parse_kind(input: &str) -> TrackerResult<TransactionKind> {
    input
        .parse::<TransactionKind>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse a transaction id, with or without a leading '#'
pub fn parse_id(input: &str) -> TrackerResult<TransactionId> {
    input.parse().map_err(|_| {
        TrackerError::Validation(format!("Invalid transaction id '{}'", input))
    })
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse an optional YYYY-MM month filter
pub fn parse_month(input: Option<&str>) -> TrackerResult<Option<Month>> {
    input
        .map(|s| {
            Month::parse(s).map_err(|e| {
                TrackerError::Validation(format!("Invalid month '{}': {}", s, e))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.75").unwrap(), Money::from_cents(1275));
        assert_eq!(parse_amount("$1,200").unwrap(), Money::from_units(1200));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
        assert!(parse_amount("--5").unwrap_err().is_validation());
        assert!(parse_amount("10.999").unwrap_err().is_validation());
        assert!(parse_amount("60000000000000000").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("Income").unwrap(), TransactionKind::Income);
        assert!(parse_kind("transfer").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("#7").unwrap(), TransactionId::new(7));
        assert!(parse_id("seven").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2025").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month(None).unwrap(), None);
        assert_eq!(parse_month(Some("2025-03")).unwrap(), Month::new(2025, 3));
        assert!(parse_month(Some("2025-13")).unwrap_err().is_validation());
    }
}
