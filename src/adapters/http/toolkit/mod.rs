//! Toolkit HTTP adapter - REST API over the shared toolkit state.
//!
//! Provides endpoints for:
//! - Opening tool pages and dispatching page events
//! - Reading the shared state and per-tool results
//! - Resetting a tool
//! - Downloading reports

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{ToolkitApiError, ToolkitAppState};
pub use routes::toolkit_router;
