//! Downloadable report - a snapshot of one tool's derived result.

use serde::{Deserialize, Serialize};

use crate::domain::architecture::{ArchitectureAdvisor, ArchitectureRecommendation};
use crate::domain::assessment::{AssessmentResult, AssessmentScorer};
use crate::domain::foundation::{DomainError, ErrorCode, ReportId, Timestamp, ToolKind};
use crate::domain::roadmap::RoadmapPlan;
use crate::domain::roi::{RoiCalculator, RoiResult};
use crate::domain::toolkit::ToolkitState;

/// Shown at the bottom of every report.
pub const REPORT_FOOTER: &str = "MediaAI Toolkit - www.github.com/HimJoe/MediaAI-Toolkit";

/// Per-tool report content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "result", rename_all = "snake_case")]
pub enum ReportBody {
    Assessment(AssessmentResult),
    Architecture(ArchitectureRecommendation),
    Roadmap(RoadmapPlan),
    Roi(RoiResult),
}

impl ReportBody {
    pub fn tool(&self) -> ToolKind {
        match self {
            ReportBody::Assessment(_) => ToolKind::Assessment,
            ReportBody::Architecture(_) => ToolKind::Architecture,
            ReportBody::Roadmap(_) => ToolKind::Roadmap,
            ReportBody::Roi(_) => ToolKind::Roi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolkitReport {
    pub report_id: ReportId,
    pub generated_at: Timestamp,
    pub title: String,
    pub body: ReportBody,
}

impl ToolkitReport {
    /// Snapshots the derived result of `tool`.
    ///
    /// # Errors
    ///
    /// `ToolIncomplete` when the tool has no result yet. The assessment only
    /// needs one completed category; the other tools need every required
    /// field.
    pub fn build(state: &ToolkitState, tool: ToolKind) -> Result<Self, DomainError> {
        let body = match tool {
            ToolKind::Assessment => {
                let result = AssessmentScorer::evaluate(&state.tool_data.assessment);
                result.overall.map(|_| ReportBody::Assessment(result))
            }
            ToolKind::Architecture => {
                ArchitectureAdvisor::recommend(&state.tool_data.architecture)
                    .map(ReportBody::Architecture)
            }
            ToolKind::Roadmap => state.roadmap_plan().map(ReportBody::Roadmap),
            ToolKind::Roi => RoiCalculator::calculate(&state.tool_data.roi).map(ReportBody::Roi),
        };

        let body = body.ok_or_else(|| {
            let missing = state.wizard(tool).missing_fields().join(", ");
            DomainError::new(
                ErrorCode::ToolIncomplete,
                format!("{} has no result yet", tool.display_name()),
            )
            .with_detail("tool", tool.slug())
            .with_detail("missing", missing)
        })?;

        Ok(Self {
            report_id: ReportId::new(),
            generated_at: Timestamp::now(),
            title: Self::title_for(tool).to_string(),
            body,
        })
    }

    pub fn tool(&self) -> ToolKind {
        self.body.tool()
    }

    pub fn title_for(tool: ToolKind) -> &'static str {
        match tool {
            ToolKind::Assessment => "Media AI Readiness Assessment Report",
            ToolKind::Architecture => "Media AI Architecture Recommendation",
            ToolKind::Roadmap => "Media AI Implementation Roadmap",
            ToolKind::Roi => "Media AI ROI Analysis",
        }
    }

    /// Download name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self.tool() {
            ToolKind::Assessment => "MediaAI_Readiness_Assessment",
            ToolKind::Architecture => "MediaAI_Architecture_Recommendation",
            ToolKind::Roadmap => "MediaAI_Implementation_Roadmap",
            ToolKind::Roi => "MediaAI_ROI_Analysis",
        }
    }
}
