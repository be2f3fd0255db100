//! Storage layer for the expense tracker
//!
//! The ledger persists one document holding every transaction and budget
//! limit. Backends implement [`LedgerStore`]; the JSON file backend writes
//! atomically so a failed save never leaves a half-written file behind.

pub mod document;
pub mod file_io;
pub mod ledger_file;
pub mod memory;

pub use document::LedgerDocument;
pub use file_io::{read_json, write_json_atomic};
pub use ledger_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::TrackerResult;

/// Persistence backend for the ledger document
pub trait LedgerStore {
    /// Load the stored document, or an empty one if nothing has been saved yet
    fn load(&self) -> TrackerResult<LedgerDocument>;

    /// Replace the stored document entirely
    fn save(&self, document: &LedgerDocument) -> TrackerResult<()>;

    /// Where the document lives, for messages and logs
    fn location(&self) -> String;
}

impl<T: LedgerStore + ?Sized> LedgerStore for std::rc::Rc<T> {
    fn load(&self) -> TrackerResult<LedgerDocument> {
        (**self).load()
    }

    fn save(&self, document: &LedgerDocument) -> TrackerResult<()> {
        (**self).save(document)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
