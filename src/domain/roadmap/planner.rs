//! Roadmap Planner - phases and target maturity from roadmap answers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Choice, MaturityLevel, UseCase};
use crate::domain::toolkit::Wizard;

use super::data::RoadmapData;

/// Months of effective duration that earn one maturity level.
const MONTHS_PER_LEVEL: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Foundation,
    Pilot,
    Scale,
    Optimize,
}

impl PhaseKind {
    pub fn all() -> &'static [PhaseKind] {
        &[
            PhaseKind::Foundation,
            PhaseKind::Pilot,
            PhaseKind::Scale,
            PhaseKind::Optimize,
        ]
    }

    /// Share of the effective duration before normalization.
    fn weight(&self) -> f64 {
        match self {
            PhaseKind::Foundation => 0.25,
            PhaseKind::Pilot => 0.25,
            PhaseKind::Scale => 0.30,
            PhaseKind::Optimize => 0.20,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhaseKind::Foundation => "Foundation",
            PhaseKind::Pilot => "Pilot",
            PhaseKind::Scale => "Scale",
            PhaseKind::Optimize => "Optimize",
        }
    }

    fn base_initiatives(&self) -> &'static [&'static str] {
        match self {
            PhaseKind::Foundation => &[
                "Audit content metadata and archive quality",
                "Set up data governance and rights policies",
                "Appoint an AI lead and steering group",
            ],
            PhaseKind::Pilot => &["Define success metrics for each pilot"],
            PhaseKind::Scale => &["Integrate AI services into the CMS and MAM workflow"],
            PhaseKind::Optimize => &[
                "Review model performance against editorial standards",
                "Retire manual steps replaced by automation",
                "Plan the next wave of use cases",
            ],
        }
    }

    fn use_case_initiative(&self, use_case: UseCase) -> Option<String> {
        match self {
            PhaseKind::Pilot => Some(format!("Pilot {} with one desk", use_case.label())),
            PhaseKind::Scale => Some(format!("Roll out {} across the newsroom", use_case.label())),
            PhaseKind::Foundation | PhaseKind::Optimize => None,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One phase with its inclusive month range, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: PhaseKind,
    pub start_month: u32,
    pub end_month: u32,
    pub initiatives: Vec<String>,
}

impl RoadmapPhase {
    pub fn duration_months(&self) -> u32 {
        self.end_month + 1 - self.start_month
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPlan {
    pub starting_maturity: MaturityLevel,
    pub target_maturity: MaturityLevel,
    pub total_months: u32,
    pub phases: Vec<RoadmapPhase>,
}

/// Pure planning over `RoadmapData`.
pub struct RoadmapPlanner;

impl RoadmapPlanner {
    /// Starting level: explicit choice first, then the assessment result.
    pub fn starting_maturity(
        data: &RoadmapData,
        assessment_maturity: Option<MaturityLevel>,
    ) -> MaturityLevel {
        data.starting_maturity
            .or(assessment_maturity)
            .unwrap_or_default()
    }

    /// Builds the plan once use cases, timeline and capacity are chosen.
    pub fn plan(
        data: &RoadmapData,
        assessment_maturity: Option<MaturityLevel>,
    ) -> Option<RoadmapPlan> {
        if !data.is_complete() {
            return None;
        }
        let timeline = data.timeline?;
        let capacity = data.capacity?;

        let starting_maturity = Self::starting_maturity(data, assessment_maturity);
        let total_months =
            (f64::from(timeline.months()) * capacity.duration_multiplier()).round() as u32;

        let phases = Self::phases(starting_maturity, total_months, &data.use_cases);
        let target_maturity = Self::target_maturity(starting_maturity, total_months);

        Some(RoadmapPlan {
            starting_maturity,
            target_maturity,
            total_months,
            phases,
        })
    }

    fn included_phases(starting_maturity: MaturityLevel) -> Vec<PhaseKind> {
        PhaseKind::all()
            .iter()
            .copied()
            .filter(|p| *p != PhaseKind::Foundation || starting_maturity < MaturityLevel::Integrated)
            .collect()
    }

    /// Splits `total_months` by normalized weights with cumulative rounding,
    /// so the last phase always ends at `total_months`.
    fn phases(
        starting_maturity: MaturityLevel,
        total_months: u32,
        use_cases: &[UseCase],
    ) -> Vec<RoadmapPhase> {
        let included = Self::included_phases(starting_maturity);
        let weight_sum: f64 = included.iter().map(PhaseKind::weight).sum();

        let mut phases = Vec::with_capacity(included.len());
        let mut cumulative = 0.0;
        let mut previous_end = 0;
        for (i, phase) in included.iter().enumerate() {
            cumulative += phase.weight();
            let start_month = previous_end + 1;
            let end_month = if i + 1 == included.len() {
                total_months
            } else {
                ((cumulative / weight_sum) * f64::from(total_months))
                    .round()
                    .max(f64::from(start_month)) as u32
            };

            let mut initiatives: Vec<String> = phase
                .base_initiatives()
                .iter()
                .map(|s| s.to_string())
                .collect();
            initiatives.extend(use_cases.iter().filter_map(|u| phase.use_case_initiative(*u)));

            phases.push(RoadmapPhase {
                phase: *phase,
                start_month,
                end_month,
                initiatives,
            });
            previous_end = end_month;
        }
        phases
    }

    fn target_maturity(starting_maturity: MaturityLevel, total_months: u32) -> MaturityLevel {
        let levels = total_months.div_ceil(MONTHS_PER_LEVEL).max(1);
        (0..levels).fold(starting_maturity, |level, _| level.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roadmap::{RoadmapOption, TeamCapacity, Timeline};

    fn data(timeline: Timeline, capacity: TeamCapacity) -> RoadmapData {
        let mut data = RoadmapData::new();
        data.apply(RoadmapOption::UseCase(UseCase::Transcription)).unwrap();
        data.apply(RoadmapOption::UseCase(UseCase::Moderation)).unwrap();
        data.apply(RoadmapOption::Timeline(timeline)).unwrap();
        data.apply(RoadmapOption::Capacity(capacity)).unwrap();
        data
    }

    #[test]
    fn incomplete_data_has_no_plan() {
        assert!(RoadmapPlanner::plan(&RoadmapData::new(), None).is_none());
    }

    #[test]
    fn twelve_moderate_months_split_by_weights() {
        let plan = RoadmapPlanner::plan(&data(Timeline::TwelveMonths, TeamCapacity::Moderate), None)
            .unwrap();
        assert_eq!(plan.total_months, 12);
        let ranges: Vec<(u32, u32)> = plan
            .phases
            .iter()
            .map(|p| (p.start_month, p.end_month))
            .collect();
        assert_eq!(ranges, vec![(1, 3), (4, 6), (7, 10), (11, 12)]);
    }

    #[test]
    fn capacity_stretches_duration() {
        let limited =
            RoadmapPlanner::plan(&data(Timeline::TwelveMonths, TeamCapacity::Limited), None)
                .unwrap();
        let dedicated =
            RoadmapPlanner::plan(&data(Timeline::TwentyFourMonths, TeamCapacity::Dedicated), None)
                .unwrap();
        assert_eq!(limited.total_months, 15);
        assert_eq!(dedicated.total_months, 20);
    }

    #[test]
    fn foundation_skipped_from_integrated() {
        let mut d = data(Timeline::EighteenMonths, TeamCapacity::Moderate);
        d.apply(RoadmapOption::StartingMaturity(MaturityLevel::Integrated))
            .unwrap();
        let plan = RoadmapPlanner::plan(&d, None).unwrap();
        assert_eq!(plan.phases.len(), 3);
        assert_eq!(plan.phases[0].phase, PhaseKind::Pilot);
        assert_eq!(plan.phases[0].start_month, 1);
        assert_eq!(plan.phases.last().unwrap().end_month, 18);
    }

    #[test]
    fn assessment_maturity_used_when_not_chosen() {
        let d = data(Timeline::TwelveMonths, TeamCapacity::Moderate);
        let plan = RoadmapPlanner::plan(&d, Some(MaturityLevel::Scalable)).unwrap();
        assert_eq!(plan.starting_maturity, MaturityLevel::Scalable);
        assert_eq!(plan.target_maturity, MaturityLevel::Transformative);
    }

    #[test]
    fn explicit_maturity_beats_assessment() {
        let mut d = data(Timeline::TwelveMonths, TeamCapacity::Moderate);
        d.apply(RoadmapOption::StartingMaturity(MaturityLevel::Functional))
            .unwrap();
        let plan = RoadmapPlanner::plan(&d, Some(MaturityLevel::Scalable)).unwrap();
        assert_eq!(plan.starting_maturity, MaturityLevel::Functional);
    }

    #[test]
    fn target_advances_per_started_year() {
        let short = RoadmapPlanner::plan(&data(Timeline::SixMonths, TeamCapacity::Moderate), None)
            .unwrap();
        let long =
            RoadmapPlanner::plan(&data(Timeline::TwentyFourMonths, TeamCapacity::Limited), None)
                .unwrap();
        assert_eq!(short.target_maturity, MaturityLevel::Functional);
        // 30 months -> three levels
        assert_eq!(long.target_maturity, MaturityLevel::Scalable);
    }

    #[test]
    fn use_cases_add_pilot_and_scale_initiatives() {
        let plan = RoadmapPlanner::plan(&data(Timeline::TwelveMonths, TeamCapacity::Moderate), None)
            .unwrap();
        let pilot = plan.phases.iter().find(|p| p.phase == PhaseKind::Pilot).unwrap();
        assert_eq!(pilot.initiatives.len(), 3);
        assert!(pilot.initiatives[1].contains(UseCase::Transcription.label()));
        let optimize = plan.phases.iter().find(|p| p.phase == PhaseKind::Optimize).unwrap();
        assert_eq!(optimize.initiatives.len(), 3);
    }

    #[test]
    fn shortest_plan_has_no_empty_phase() {
        let plan = RoadmapPlanner::plan(&data(Timeline::SixMonths, TeamCapacity::Dedicated), None)
            .unwrap();
        assert_eq!(plan.total_months, 5);
        assert!(plan.phases.iter().all(|p| p.end_month >= p.start_month));
        assert_eq!(plan.phases.last().unwrap().end_month, 5);
    }
}
