//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over ports.

pub mod report;

pub use report::{GenerateReportError, GenerateReportHandler, GenerateReportQuery};
