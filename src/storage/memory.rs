//! In-memory backend, for embedding and tests

use std::cell::{Cell, RefCell};

use crate::error::{TrackerError, TrackerResult};

use super::document::LedgerDocument;
use super::LedgerStore;

/// Keeps the last saved document in memory
///
/// `fail_saves` makes every later save return a storage error, which lets
/// callers check how the ledger behaves when persistence breaks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<LedgerDocument>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    pub fn with_document(document: LedgerDocument) -> Self {
        Self {
            document: RefCell::new(document),
            ..Self::default()
        }
    }

    /// Snapshot of the last saved document
    pub fn document(&self) -> LedgerDocument {
        self.document.borrow().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> TrackerResult<LedgerDocument> {
        Ok(self.document.borrow().clone())
    }

    fn save(&self, document: &LedgerDocument) -> TrackerResult<()> {
        if self.fail_saves.get() {
            return Err(TrackerError::Storage("memory store is read-only".into()));
        }
        *self.document.borrow_mut() = document.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
