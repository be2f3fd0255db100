//! Configuration for the expense tracker
//!
//! - data directory and ledger file resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::{TrackerPaths, DATA_DIR_ENV};
pub use settings::Settings;
