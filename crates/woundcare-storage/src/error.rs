use thiserror::Error;
use woundcare_core::error::CoreError;
use woundcare_core::history::HistoryAccessError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid subject: {0}")]
    InvalidSubject(#[from] CoreError),

    #[error("history for subject '{subject_id}' is corrupt at line {line}: {reason}")]
    Corrupt {
        subject_id: String,
        line: usize,
        reason: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for HistoryAccessError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(e) => HistoryAccessError::Io(e),
            StorageError::Corrupt {
                subject_id,
                line,
                reason,
            } => HistoryAccessError::Corrupt {
                subject_id,
                reason: format!("line {line}: {reason}"),
            },
            other => HistoryAccessError::Unavailable(other.to_string()),
        }
    }
}
