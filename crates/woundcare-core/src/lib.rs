//! woundcare-core
//!
//! Pure domain types, calibration config, and the history accessor contract.
//! No image decoding or storage dependency. This is the shared vocabulary
//! of the Woundcare pipeline.

pub mod config;
pub mod error;
pub mod history;
pub mod keys;
pub mod models;
