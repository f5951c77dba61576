//! woundcare-decision
//!
//! Trend analysis and the rule-based risk classifier. Pure functions over
//! `MetricSet` values and explicit config; no I/O.

pub mod classify;
pub mod quality;
pub mod rules;
pub mod trend;

pub use classify::classify;
pub use quality::derive_quality;
pub use trend::analyze;
