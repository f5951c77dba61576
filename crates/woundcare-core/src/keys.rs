//! Subject id and history path conventions.
//!
//! Pure string functions with no filesystem access. These define how a subject
//! id maps onto the layout of a history store.

use crate::error::CoreError;

pub const SUBJECTS_PREFIX: &str = "subjects/";

const MAX_SUBJECT_LEN: usize = 128;

/// Check that a subject id is usable as a history key.
///
/// Ids are limited to ASCII alphanumerics plus `-`, `_` and `.`, and may not
/// start with a dot, so they can never escape the store directory.
pub fn validate_subject_id(id: &str) -> Result<(), CoreError> {
    let invalid = |reason: &str| CoreError::InvalidSubject {
        id: id.to_string(),
        reason: reason.to_string(),
    };

    if id.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if id.len() > MAX_SUBJECT_LEN {
        return Err(invalid("longer than 128 characters"));
    }
    if id.starts_with('.') {
        return Err(invalid("must not start with '.'"));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("unexpected character {c:?}")));
    }
    Ok(())
}

pub fn subject_history(id: &str) -> String {
    format!("{SUBJECTS_PREFIX}{id}.jsonl")
}
