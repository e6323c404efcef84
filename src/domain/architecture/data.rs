//! ArchitectureData - the architecture helper's persisted record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Choice, OrganizationSize, Step, ToolKind};
use crate::domain::toolkit::Wizard;

use super::options::{
    ArchitectureOption, ArchitectureQuestion, Challenge, ContentType, InfrastructurePreference,
    PrimaryGoal, TeamExpertise,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchitectureData {
    pub current_step: Step,
    pub content_types: BTreeSet<ContentType>,
    pub primary_goal: Option<PrimaryGoal>,
    pub organization_size: Option<OrganizationSize>,
    pub infrastructure: Option<InfrastructurePreference>,
    pub team_expertise: Option<TeamExpertise>,
    pub challenges: BTreeSet<Challenge>,
}

impl ArchitectureData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a click on an option card.
    ///
    /// Single-select questions replace the previous choice; multi-select
    /// questions toggle. Returns whether the option is selected afterwards.
    pub fn apply(&mut self, option: ArchitectureOption) -> bool {
        match option {
            ArchitectureOption::ContentType(o) => toggle(&mut self.content_types, o),
            ArchitectureOption::Challenge(o) => toggle(&mut self.challenges, o),
            ArchitectureOption::PrimaryGoal(o) => {
                self.primary_goal = Some(o);
                true
            }
            ArchitectureOption::OrganizationSize(o) => {
                self.organization_size = Some(o);
                true
            }
            ArchitectureOption::Infrastructure(o) => {
                self.infrastructure = Some(o);
                true
            }
            ArchitectureOption::TeamExpertise(o) => {
                self.team_expertise = Some(o);
                true
            }
        }
    }

    pub fn is_selected(&self, option: ArchitectureOption) -> bool {
        match option {
            ArchitectureOption::ContentType(o) => self.content_types.contains(&o),
            ArchitectureOption::Challenge(o) => self.challenges.contains(&o),
            ArchitectureOption::PrimaryGoal(o) => self.primary_goal == Some(o),
            ArchitectureOption::OrganizationSize(o) => self.organization_size == Some(o),
            ArchitectureOption::Infrastructure(o) => self.infrastructure == Some(o),
            ArchitectureOption::TeamExpertise(o) => self.team_expertise == Some(o),
        }
    }

    /// The question on the current step.
    pub fn current_question(&self) -> ArchitectureQuestion {
        let all = ArchitectureQuestion::all();
        all[self.current_step.index().min(all.len() - 1)]
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

impl Wizard for ArchitectureData {
    fn kind(&self) -> ToolKind {
        ToolKind::Architecture
    }

    fn total_steps(&self) -> u8 {
        ArchitectureQuestion::all().len() as u8
    }

    fn current_step(&self) -> Step {
        self.current_step
    }

    fn store_step(&mut self, step: Step) {
        self.current_step = step;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.content_types.is_empty() {
            missing.push(ArchitectureQuestion::ContentTypes.slug());
        }
        if self.primary_goal.is_none() {
            missing.push(ArchitectureQuestion::PrimaryGoal.slug());
        }
        if self.organization_size.is_none() {
            missing.push(ArchitectureQuestion::OrganizationSize.slug());
        }
        if self.infrastructure.is_none() {
            missing.push(ArchitectureQuestion::Infrastructure.slug());
        }
        if self.team_expertise.is_none() {
            missing.push(ArchitectureQuestion::TeamExpertise.slug());
        }
        missing
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
