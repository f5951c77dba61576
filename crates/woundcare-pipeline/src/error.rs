use thiserror::Error;
use woundcare_core::config::ConfigError;
use woundcare_core::error::CoreError;
use woundcare_core::history::HistoryAccessError;
use woundcare_perception::PerceptionError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Extraction rejected the image. Passed through unchanged so the caller
    /// can prompt for a new photo.
    #[error(transparent)]
    InvalidImage(#[from] PerceptionError),

    /// The history store faulted. Classification does not proceed, since
    /// the trend would be computed against the wrong baseline.
    #[error("history lookup failed: {0}")]
    HistoryAccess(#[from] HistoryAccessError),

    #[error(transparent)]
    InvalidSubject(#[from] CoreError),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}
