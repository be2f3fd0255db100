//! Terminal display formatting
//!
//! Helpers for rendering transactions and report values in the CLI.

pub mod report;
pub mod transaction;

pub use report::{
    double_separator, format_bar, format_header, format_money_colored, format_percentage,
    period_label, separator, truncate,
};
pub use transaction::{format_transaction_details, format_transaction_table};
