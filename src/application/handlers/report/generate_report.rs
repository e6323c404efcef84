//! GenerateReportHandler - Query handler for downloadable tool reports.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ToolKind};
use crate::domain::report::ToolkitReport;
use crate::domain::toolkit::ToolkitState;
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExporter};

/// Query to render one tool's report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReportQuery {
    pub tool: ToolKind,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Error)]
pub enum GenerateReportError {
    /// The tool has no derived result yet.
    #[error("{0}")]
    Incomplete(DomainError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler that snapshots a tool's result and runs the matching exporter.
///
/// Formats without a registered exporter report `ExportError::Unavailable`.
pub struct GenerateReportHandler {
    exporters: Vec<Arc<dyn ReportExporter>>,
}

impl GenerateReportHandler {
    pub fn new(exporters: Vec<Arc<dyn ReportExporter>>) -> Self {
        Self { exporters }
    }

    pub fn supports(&self, format: ExportFormat) -> bool {
        self.exporters.iter().any(|e| e.format() == format)
    }

    pub async fn handle(
        &self,
        state: &ToolkitState,
        query: GenerateReportQuery,
    ) -> Result<ExportedReport, GenerateReportError> {
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.format() == query.format)
            .ok_or_else(|| {
                ExportError::Unavailable(format!("{} export is disabled", query.format))
            })?;

        let report =
            ToolkitReport::build(state, query.tool).map_err(GenerateReportError::Incomplete)?;
        let exported = exporter.export(&report).await?;

        tracing::info!(
            tool = %query.tool,
            format = %query.format,
            report_id = %report.report_id,
            bytes = exported.content.len(),
            "Generated report"
        );
        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::{JsonReportExporter, TextReportExporter};
    use crate::domain::foundation::{ErrorCode, UseCase};
    use crate::domain::roadmap::{RoadmapOption, TeamCapacity, Timeline};

    fn roadmap_state() -> ToolkitState {
        let mut state = ToolkitState::new();
        state.update(|data| {
            data.roadmap
                .apply(RoadmapOption::UseCase(UseCase::Personalization))
                .unwrap();
            data.roadmap
                .apply(RoadmapOption::Timeline(Timeline::EighteenMonths))
                .unwrap();
            data.roadmap
                .apply(RoadmapOption::Capacity(TeamCapacity::Dedicated))
                .unwrap();
        });
        state
    }

    fn handler_with_all() -> GenerateReportHandler {
        GenerateReportHandler::new(vec![
            Arc::new(JsonReportExporter::new()),
            Arc::new(TextReportExporter::new()),
        ])
    }

    #[tokio::test]
    async fn renders_requested_format() {
        let handler = handler_with_all();
        let query = GenerateReportQuery {
            tool: ToolKind::Roadmap,
            format: ExportFormat::Text,
        };

        let exported = handler.handle(&roadmap_state(), query).await.unwrap();

        assert_eq!(exported.filename, "MediaAI_Implementation_Roadmap.txt");
        assert!(exported.content_lossy().contains("Foundation (Months 1-"));
    }

    #[tokio::test]
    async fn incomplete_tool_is_rejected() {
        let handler = handler_with_all();
        let query = GenerateReportQuery {
            tool: ToolKind::Roi,
            format: ExportFormat::Json,
        };

        let err = handler.handle(&roadmap_state(), query).await.unwrap_err();

        match err {
            GenerateReportError::Incomplete(e) => assert_eq!(e.code, ErrorCode::ToolIncomplete),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_exporter_is_unavailable() {
        let handler = GenerateReportHandler::new(vec![Arc::new(JsonReportExporter::new())]);
        assert!(!handler.supports(ExportFormat::Text));

        let query = GenerateReportQuery {
            tool: ToolKind::Roadmap,
            format: ExportFormat::Text,
        };
        let err = handler.handle(&roadmap_state(), query).await.unwrap_err();

        assert!(matches!(
            err,
            GenerateReportError::Export(ExportError::Unavailable(_))
        ));
    }
}
