use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use woundcare_core::history::{HistoryAccessError, HistoryAccessor};
use woundcare_core::models::history::HistoryEntry;

/// Process-local history, for tests and embedding callers that persist
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<HashMap<String, Vec<HistoryEntry>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, entry: HistoryEntry) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let subject = entries.entry(entry.subject_id.clone()).or_default();
        subject.push(entry);
        subject.sort_by_key(|e| e.recorded_at);
    }

    /// All entries for a subject, oldest first.
    pub fn list(&self, subject_id: &str) -> Vec<HistoryEntry> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(subject_id).cloned().unwrap_or_default()
    }
}

impl HistoryAccessor for MemoryHistoryStore {
    async fn get_latest(&self, subject_id: &str) -> Result<Option<HistoryEntry>, HistoryAccessError> {
        Ok(self.list(subject_id).pop())
    }
}
