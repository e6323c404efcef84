//! Questions and option enums of the roadmap generator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Choice, MaturityLevel, Step, UseCase, ValidationError};

/// Most use cases a roadmap will prioritize.
pub const MAX_PRIORITY_USE_CASES: usize = 3;

/// Planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    SixMonths,
    TwelveMonths,
    EighteenMonths,
    TwentyFourMonths,
}

impl Timeline {
    pub fn months(&self) -> u32 {
        match self {
            Timeline::SixMonths => 6,
            Timeline::TwelveMonths => 12,
            Timeline::EighteenMonths => 18,
            Timeline::TwentyFourMonths => 24,
        }
    }
}

impl Choice for Timeline {
    fn all() -> &'static [Self] {
        &[
            Timeline::SixMonths,
            Timeline::TwelveMonths,
            Timeline::EighteenMonths,
            Timeline::TwentyFourMonths,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            Timeline::SixMonths => "6_months",
            Timeline::TwelveMonths => "12_months",
            Timeline::EighteenMonths => "18_months",
            Timeline::TwentyFourMonths => "24_months",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Timeline::SixMonths => "6 Months",
            Timeline::TwelveMonths => "12 Months",
            Timeline::EighteenMonths => "18 Months",
            Timeline::TwentyFourMonths => "24 Months",
        }
    }
}

/// People available to deliver the roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamCapacity {
    Limited,
    Moderate,
    Dedicated,
}

impl TeamCapacity {
    /// Stretch factor applied to the timeline.
    pub fn duration_multiplier(&self) -> f64 {
        match self {
            TeamCapacity::Limited => 1.25,
            TeamCapacity::Moderate => 1.0,
            TeamCapacity::Dedicated => 0.85,
        }
    }
}

impl Choice for TeamCapacity {
    fn all() -> &'static [Self] {
        &[
            TeamCapacity::Limited,
            TeamCapacity::Moderate,
            TeamCapacity::Dedicated,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            TeamCapacity::Limited => "limited",
            TeamCapacity::Moderate => "moderate",
            TeamCapacity::Dedicated => "dedicated",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TeamCapacity::Limited => "Limited (shared staff)",
            TeamCapacity::Moderate => "Moderate (part-time team)",
            TeamCapacity::Dedicated => "Dedicated AI team",
        }
    }
}

/// The four questions, one per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapQuestion {
    StartingMaturity,
    UseCases,
    Timeline,
    Capacity,
}

impl RoadmapQuestion {
    pub fn is_multi_select(&self) -> bool {
        matches!(self, RoadmapQuestion::UseCases)
    }

    pub fn step(&self) -> Step {
        let idx = Self::all().iter().position(|q| q == self).unwrap_or(0);
        Step::new(idx as u8 + 1, Self::all().len() as u8)
    }
}

impl Choice for RoadmapQuestion {
    fn all() -> &'static [Self] {
        &[
            RoadmapQuestion::StartingMaturity,
            RoadmapQuestion::UseCases,
            RoadmapQuestion::Timeline,
            RoadmapQuestion::Capacity,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            RoadmapQuestion::StartingMaturity => "starting_maturity",
            RoadmapQuestion::UseCases => "use_cases",
            RoadmapQuestion::Timeline => "timeline",
            RoadmapQuestion::Capacity => "capacity",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RoadmapQuestion::StartingMaturity => "Current Maturity",
            RoadmapQuestion::UseCases => "Priority Use Cases",
            RoadmapQuestion::Timeline => "Timeline",
            RoadmapQuestion::Capacity => "Team Capacity",
        }
    }
}

/// One clickable option card of the roadmap generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadmapOption {
    StartingMaturity(MaturityLevel),
    UseCase(UseCase),
    Timeline(Timeline),
    Capacity(TeamCapacity),
}

impl RoadmapOption {
    pub fn all() -> Vec<RoadmapOption> {
        let mut options = Vec::new();
        options.extend(MaturityLevel::all().iter().map(|o| Self::StartingMaturity(*o)));
        options.extend(UseCase::all().iter().map(|o| Self::UseCase(*o)));
        options.extend(Timeline::all().iter().map(|o| Self::Timeline(*o)));
        options.extend(TeamCapacity::all().iter().map(|o| Self::Capacity(*o)));
        options
    }

    pub fn question(&self) -> RoadmapQuestion {
        match self {
            Self::StartingMaturity(_) => RoadmapQuestion::StartingMaturity,
            Self::UseCase(_) => RoadmapQuestion::UseCases,
            Self::Timeline(_) => RoadmapQuestion::Timeline,
            Self::Capacity(_) => RoadmapQuestion::Capacity,
        }
    }

    pub fn option_slug(&self) -> &'static str {
        match self {
            Self::StartingMaturity(o) => Choice::slug(o),
            Self::UseCase(o) => o.slug(),
            Self::Timeline(o) => o.slug(),
            Self::Capacity(o) => o.slug(),
        }
    }

    /// Parses the `question.option` form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::invalid_format("roadmap_option", s.to_string());
        let (question, option) = s.split_once('.').ok_or_else(invalid)?;
        let question = RoadmapQuestion::from_slug(question).ok_or_else(invalid)?;
        let parsed = match question {
            RoadmapQuestion::StartingMaturity => {
                <MaturityLevel as Choice>::from_slug(option).map(Self::StartingMaturity)
            }
            RoadmapQuestion::UseCases => UseCase::from_slug(option).map(Self::UseCase),
            RoadmapQuestion::Timeline => Timeline::from_slug(option).map(Self::Timeline),
            RoadmapQuestion::Capacity => TeamCapacity::from_slug(option).map(Self::Capacity),
        };
        parsed.ok_or_else(invalid)
    }
}

impl fmt::Display for RoadmapOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.question().slug(), self.option_slug())
    }
}
