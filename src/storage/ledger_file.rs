//! JSON file backend for the ledger document

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TrackerResult;

use super::document::LedgerDocument;
use super::file_io::{read_json, write_json_atomic};
use super::LedgerStore;

/// Stores the whole ledger in a single JSON file, rewritten on every save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> TrackerResult<LedgerDocument> {
        let doc: LedgerDocument = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            transactions = doc.transactions.len(),
            budget_limits = doc.budget_limits.len(),
            "loaded ledger document"
        );
        Ok(doc)
    }

    fn save(&self, document: &LedgerDocument) -> TrackerResult<()> {
        write_json_atomic(&self.path, document)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
