//! Report Exporter Port - Turns a `ToolkitReport` into a downloadable file.
//!
//! Adapters provide one implementation per `ExportFormat`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::ToolkitReport;

/// Port for rendering a report into bytes.
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering fails.
    async fn export(&self, report: &ToolkitReport) -> Result<ExportedReport, ExportError>;
}

/// Export formats supported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Machine-readable JSON download.
    #[default]
    Json,
    /// Printable plain-text document, the source for "Save as PDF".
    Text,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported report with content and download metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub content: Vec<u8>,
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedReport {
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// Content as text, replacing invalid UTF-8.
    pub fn content_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Report serialization failed: {0}")]
    SerializationFailed(String),

    /// The format is known but switched off by configuration.
    #[error("Export unavailable: {0}")]
    Unavailable(String),
}
