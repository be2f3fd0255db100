//! Service layer for the expense tracker
//!
//! The ledger owns validation and persistence; search and demo seeding sit
//! on top of it.

pub mod demo;
pub mod ledger;
pub mod search;

pub use demo::seed_demo_data;
pub use ledger::{Ledger, NewTransaction};
pub use search::{search_transactions, SearchMode};
