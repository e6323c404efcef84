//! HTTP adapters - REST API implementations.

pub mod toolkit;

pub use toolkit::{toolkit_router, ToolkitAppState};
