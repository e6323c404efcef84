//! Application layer - State coordination and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod coordinator;
pub mod handlers;

pub use coordinator::{SaveOutcome, StateCoordinator, DEFAULT_STATE_KEY};
pub use handlers::{GenerateReportError, GenerateReportHandler, GenerateReportQuery};
