//! woundcare-report
//!
//! Text produced after classification: the patient-facing summary (generated
//! or templated fallback) and the plain-text clinician report. Nothing here
//! can change a `RiskResult`.

pub mod error;
pub mod render;
pub mod report;
pub mod summary;
pub mod templates;

pub use error::ReportError;
pub use report::render_report;
pub use summary::{NoGenerator, Summary, SummaryGenerator, SummarySource, summarize};
