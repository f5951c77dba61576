//! woundcare-perception
//!
//! Deterministic metric extraction from a wound photograph. Color and
//! brightness heuristics only; no trained model.

pub mod error;
pub mod extract;
pub mod photo;
pub mod segment;

pub use error::PerceptionError;
pub use extract::extract;
pub use photo::WoundImage;
