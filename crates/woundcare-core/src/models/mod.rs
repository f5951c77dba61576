pub mod context;
pub mod history;
pub mod metrics;
pub mod quality;
pub mod risk;
pub mod trend;
