//! JSON report exporter - the "Download" button's file.

use async_trait::async_trait;

use crate::domain::report::ToolkitReport;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExporter};

#[derive(Debug, Clone)]
pub struct JsonReportExporter {
    pretty: bool,
}

impl JsonReportExporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportExporter for JsonReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    async fn export(&self, report: &ToolkitReport) -> Result<ExportedReport, ExportError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(report)
        } else {
            serde_json::to_vec(report)
        }
        .map_err(|e| ExportError::SerializationFailed(e.to_string()))?;

        Ok(ExportedReport::new(bytes, ExportFormat::Json, report.file_stem()))
    }
}
