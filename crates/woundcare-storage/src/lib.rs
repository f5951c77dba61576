//! woundcare-storage
//!
//! Assessment history stores. The pipeline only reads through
//! `HistoryAccessor`; appending after classification is the caller's job.

pub mod error;
pub mod file;
pub mod memory;

pub use file::FileHistoryStore;
pub use memory::MemoryHistoryStore;
