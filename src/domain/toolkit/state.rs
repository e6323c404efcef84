//! ToolkitState - the single shared record behind every page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::architecture::ArchitectureData;
use crate::domain::assessment::{AssessmentData, AssessmentScorer};
use crate::domain::foundation::ToolKind;
use crate::domain::roadmap::{RoadmapData, RoadmapPlan, RoadmapPlanner};
use crate::domain::roi::RoiData;

use super::Wizard;

/// Answer records of all four wizards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolDataSet {
    pub assessment: AssessmentData,
    pub architecture: ArchitectureData,
    pub roadmap: RoadmapData,
    pub roi: RoiData,
}

impl ToolDataSet {
    pub fn wizard(&self, kind: ToolKind) -> &dyn Wizard {
        match kind {
            ToolKind::Assessment => &self.assessment,
            ToolKind::Architecture => &self.architecture,
            ToolKind::Roadmap => &self.roadmap,
            ToolKind::Roi => &self.roi,
        }
    }

    pub fn wizard_mut(&mut self, kind: ToolKind) -> &mut dyn Wizard {
        match kind {
            ToolKind::Assessment => &mut self.assessment,
            ToolKind::Architecture => &mut self.architecture,
            ToolKind::Roadmap => &mut self.roadmap,
            ToolKind::Roi => &mut self.roi,
        }
    }
}

/// Which tool is active, every tool's answers, and per-tool completion.
///
/// `user_progress[tool]` always mirrors `tool_data[tool].is_complete()`
/// once `refresh_progress` has run; every mutating method here calls it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitState {
    pub current_tool: ToolKind,
    pub tool_data: ToolDataSet,
    pub user_progress: BTreeMap<ToolKind, bool>,
}

impl Default for ToolkitState {
    fn default() -> Self {
        let mut state = Self {
            current_tool: ToolKind::default(),
            tool_data: ToolDataSet::default(),
            user_progress: BTreeMap::new(),
        };
        state.refresh_progress();
        state
    }
}

impl ToolkitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repairs a record read from storage: clamps steps, drops invalid
    /// values and re-derives progress.
    pub fn normalize(&mut self) {
        for kind in ToolKind::all() {
            self.tool_data.wizard_mut(*kind).normalize();
        }
        self.refresh_progress();
    }

    pub fn refresh_progress(&mut self) {
        self.user_progress = ToolKind::all()
            .iter()
            .map(|kind| (*kind, self.tool_data.wizard(*kind).is_complete()))
            .collect();
    }

    pub fn is_complete(&self, kind: ToolKind) -> bool {
        self.user_progress.get(&kind).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.user_progress.values().filter(|done| **done).count()
    }

    pub fn wizard(&self, kind: ToolKind) -> &dyn Wizard {
        self.tool_data.wizard(kind)
    }

    /// Runs `f` against the answer records and re-derives progress afterwards.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut ToolDataSet) -> R) -> R {
        let out = f(&mut self.tool_data);
        self.refresh_progress();
        out
    }

    /// Clears one tool's answers; its progress flag drops to false.
    pub fn reset_tool(&mut self, kind: ToolKind) {
        self.tool_data.wizard_mut(kind).reset();
        self.refresh_progress();
    }

    pub fn activate(&mut self, kind: ToolKind) {
        self.current_tool = kind;
    }

    /// Roadmap plan, seeded with the assessment's maturity when available.
    pub fn roadmap_plan(&self) -> Option<RoadmapPlan> {
        let assessed = AssessmentScorer::maturity_level(&self.tool_data.assessment);
        RoadmapPlanner::plan(&self.tool_data.roadmap, assessed)
    }
}
