//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the toolkit to the outside world:
//! - `storage` - Key-value state storage (file, in-memory)
//! - `export` - Report exporters (JSON, printable text)
//! - `binder` - Page element binding and view rendering
//! - `http` - REST API over the shared state

pub mod binder;
pub mod export;
pub mod http;
pub mod storage;

pub use binder::{BinderSettings, DomBinder};
pub use export::{JsonReportExporter, TextReportExporter};
pub use http::{toolkit_router, ToolkitAppState};
pub use storage::{FileStateStorage, InMemoryStateStorage};
