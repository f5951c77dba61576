use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid subject id '{id}': {reason}")]
    InvalidSubject { id: String, reason: String },
}
