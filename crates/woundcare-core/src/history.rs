//! Read contract between the pipeline and whatever stores assessment history.

use std::future::Future;

use thiserror::Error;

use crate::models::history::HistoryEntry;

/// A storage-layer fault. "No prior entry" is never an error; accessors
/// return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum HistoryAccessError {
    #[error("history store unavailable: {0}")]
    Unavailable(String),

    #[error("history for subject '{subject_id}' is corrupt: {reason}")]
    Corrupt { subject_id: String, reason: String },

    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait HistoryAccessor: Send + Sync {
    /// Most recent entry recorded for `subject_id`, if any.
    fn get_latest(
        &self,
        subject_id: &str,
    ) -> impl Future<Output = Result<Option<HistoryEntry>, HistoryAccessError>> + Send;
}
