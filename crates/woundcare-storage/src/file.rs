use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use woundcare_core::history::{HistoryAccessError, HistoryAccessor};
use woundcare_core::keys;
use woundcare_core::models::history::HistoryEntry;

use crate::error::StorageError;

/// History kept as one JSON Lines file per subject under `root`.
///
/// Appends are whole-line writes; concurrent writers for the same subject are
/// last-write-wins, which is acceptable for this domain.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    root: PathBuf,
}

impl FileHistoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, subject_id: &str) -> Result<PathBuf, StorageError> {
        keys::validate_subject_id(subject_id)?;
        Ok(self.root.join(keys::subject_history(subject_id)))
    }

    pub async fn append(&self, entry: &HistoryEntry) -> Result<(), StorageError> {
        let path = self.path_for(&entry.subject_id)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let line = entry.to_json_line().map_err(|e| match e {
            woundcare_core::error::CoreError::Serialization(e) => StorageError::Serialization(e),
            other => StorageError::InvalidSubject(other),
        })?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(
            subject_id = %entry.subject_id,
            entry_id = %entry.id,
            path = %path.display(),
            "history entry appended"
        );
        Ok(())
    }

    /// All entries for a subject, oldest first. An unknown subject has an
    /// empty history.
    pub async fn list(&self, subject_id: &str) -> Result<Vec<HistoryEntry>, StorageError> {
        let path = self.path_for(subject_id)?;
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (i, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry =
                HistoryEntry::from_json_line(line).map_err(|e| StorageError::Corrupt {
                    subject_id: subject_id.to_string(),
                    line: i + 1,
                    reason: e.to_string(),
                })?;
            entries.push(entry);
        }
        entries.sort_by_key(|e| e.recorded_at);
        Ok(entries)
    }

    pub async fn latest(&self, subject_id: &str) -> Result<Option<HistoryEntry>, StorageError> {
        Ok(self.list(subject_id).await?.pop())
    }
}

impl HistoryAccessor for FileHistoryStore {
    async fn get_latest(&self, subject_id: &str) -> Result<Option<HistoryEntry>, HistoryAccessError> {
        Ok(self.latest(subject_id).await?)
    }
}
