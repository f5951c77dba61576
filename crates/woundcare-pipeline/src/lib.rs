//! woundcare-pipeline
//!
//! Sequences extraction, history lookup, trend analysis and classification
//! into a single call. Reads history through [`HistoryAccessor`]; never
//! writes it.
//!
//! [`HistoryAccessor`]: woundcare_core::history::HistoryAccessor

pub mod error;
pub mod orchestrate;

pub use error::PipelineError;
pub use orchestrate::Pipeline;
