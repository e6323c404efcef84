//! RoadmapData - the roadmap generator's persisted record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Choice, MaturityLevel, Step, ToolKind, UseCase, ValidationError};
use crate::domain::toolkit::Wizard;

use super::options::{
    RoadmapOption, RoadmapQuestion, TeamCapacity, Timeline, MAX_PRIORITY_USE_CASES,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapData {
    pub current_step: Step,
    /// Explicit choice; falls back to the assessment result when unset.
    pub starting_maturity: Option<MaturityLevel>,
    /// Priority order is selection order.
    pub use_cases: Vec<UseCase>,
    pub timeline: Option<Timeline>,
    pub capacity: Option<TeamCapacity>,
}

impl RoadmapData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a click on an option card.
    ///
    /// Returns whether the option is selected afterwards. Selecting a fourth
    /// use case is rejected.
    pub fn apply(&mut self, option: RoadmapOption) -> Result<bool, ValidationError> {
        match option {
            RoadmapOption::StartingMaturity(level) => {
                self.starting_maturity = Some(level);
                Ok(true)
            }
            RoadmapOption::UseCase(use_case) => {
                if let Some(pos) = self.use_cases.iter().position(|u| *u == use_case) {
                    self.use_cases.remove(pos);
                    return Ok(false);
                }
                if self.use_cases.len() >= MAX_PRIORITY_USE_CASES {
                    return Err(ValidationError::out_of_range(
                        "use_cases",
                        1,
                        MAX_PRIORITY_USE_CASES as i32,
                        self.use_cases.len() as i32 + 1,
                    ));
                }
                self.use_cases.push(use_case);
                Ok(true)
            }
            RoadmapOption::Timeline(timeline) => {
                self.timeline = Some(timeline);
                Ok(true)
            }
            RoadmapOption::Capacity(capacity) => {
                self.capacity = Some(capacity);
                Ok(true)
            }
        }
    }

    pub fn is_selected(&self, option: RoadmapOption) -> bool {
        match option {
            RoadmapOption::StartingMaturity(level) => self.starting_maturity == Some(level),
            RoadmapOption::UseCase(use_case) => self.use_cases.contains(&use_case),
            RoadmapOption::Timeline(timeline) => self.timeline == Some(timeline),
            RoadmapOption::Capacity(capacity) => self.capacity == Some(capacity),
        }
    }

    pub fn current_question(&self) -> RoadmapQuestion {
        let all = RoadmapQuestion::all();
        all[self.current_step.index().min(all.len() - 1)]
    }
}

impl Wizard for RoadmapData {
    fn kind(&self) -> ToolKind {
        ToolKind::Roadmap
    }

    fn total_steps(&self) -> u8 {
        RoadmapQuestion::all().len() as u8
    }

    fn current_step(&self) -> Step {
        self.current_step
    }

    fn store_step(&mut self, step: Step) {
        self.current_step = step;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.use_cases.is_empty() {
            missing.push(RoadmapQuestion::UseCases.slug());
        }
        if self.timeline.is_none() {
            missing.push(RoadmapQuestion::Timeline.slug());
        }
        if self.capacity.is_none() {
            missing.push(RoadmapQuestion::Capacity.slug());
        }
        missing
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn normalize(&mut self) {
        self.current_step = self.current_step.clamped(self.total_steps());
        let mut seen = Vec::with_capacity(MAX_PRIORITY_USE_CASES);
        for use_case in self.use_cases.drain(..) {
            if !seen.contains(&use_case) && seen.len() < MAX_PRIORITY_USE_CASES {
                seen.push(use_case);
            }
        }
        self.use_cases = seen;
    }
}
