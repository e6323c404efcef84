//! Report export adapters - Implementations of the ReportExporter port.
//!
//! - `JsonReportExporter` - Structured JSON download
//! - `TextReportExporter` - Printable document used for "Save as PDF"

mod json_report_exporter;
mod text_report_exporter;

pub use json_report_exporter::JsonReportExporter;
pub use text_report_exporter::{format_currency, TextReportExporter};
