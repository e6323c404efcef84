//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StateStorage` - String key-value store holding the serialized state
//! - `ReportExporter` - Renders a report into a downloadable file

mod report_exporter;
mod state_storage;

pub use report_exporter::{ExportError, ExportFormat, ExportedReport, ReportExporter};
pub use state_storage::{validate_key, StateStorage, StateStorageError};
