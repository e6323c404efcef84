//! ROI calculator questions, option enums and numeric inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Choice, OrganizationSize, Step, UseCase, ValidationError};

/// How far the rollout reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationScope {
    Pilot,
    Department,
    Enterprise,
}

impl Choice for ImplementationScope {
    fn all() -> &'static [Self] {
        &[
            ImplementationScope::Pilot,
            ImplementationScope::Department,
            ImplementationScope::Enterprise,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            ImplementationScope::Pilot => "pilot",
            ImplementationScope::Department => "department",
            ImplementationScope::Enterprise => "enterprise",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ImplementationScope::Pilot => "Pilot Project",
            ImplementationScope::Department => "Department-wide",
            ImplementationScope::Enterprise => "Enterprise-wide",
        }
    }
}

/// Which period the ROI percentage covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum RoiHorizon {
    #[default]
    Annual,
    ThreeYear,
}

impl RoiHorizon {
    pub fn years(&self) -> u32 {
        match self {
            RoiHorizon::Annual => 1,
            RoiHorizon::ThreeYear => 3,
        }
    }
}

impl Choice for RoiHorizon {
    fn all() -> &'static [Self] {
        &[RoiHorizon::Annual, RoiHorizon::ThreeYear]
    }

    fn slug(&self) -> &'static str {
        match self {
            RoiHorizon::Annual => "annual",
            RoiHorizon::ThreeYear => "three_year",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RoiHorizon::Annual => "Annual",
            RoiHorizon::ThreeYear => "3-Year",
        }
    }
}

/// Free-form numeric inputs on the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiFigure {
    StaffCount,
    HoursSavedPerWeek,
    HourlyRate,
}

impl RoiFigure {
    /// Parses a raw input value for this figure.
    ///
    /// Empty input clears the figure. Negative or non-finite numbers are
    /// rejected, and staff count must be a whole number.
    pub fn parse_value(&self, raw: &str) -> Result<Option<f64>, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let value: f64 = raw
            .parse()
            .map_err(|_| ValidationError::invalid_format(self.slug(), "expected a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::invalid_format(
                self.slug(),
                "expected a non-negative number",
            ));
        }
        if *self == RoiFigure::StaffCount && value.fract() != 0.0 {
            return Err(ValidationError::invalid_format(
                self.slug(),
                "expected a whole number",
            ));
        }
        Ok(Some(value))
    }
}

impl Choice for RoiFigure {
    fn all() -> &'static [Self] {
        &[
            RoiFigure::StaffCount,
            RoiFigure::HoursSavedPerWeek,
            RoiFigure::HourlyRate,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            RoiFigure::StaffCount => "staff_count",
            RoiFigure::HoursSavedPerWeek => "hours_saved_per_week",
            RoiFigure::HourlyRate => "hourly_rate",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RoiFigure::StaffCount => "Staff affected",
            RoiFigure::HoursSavedPerWeek => "Hours saved per person per week",
            RoiFigure::HourlyRate => "Average hourly rate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiQuestion {
    OrganizationSize,
    UseCase,
    Scope,
    Figures,
}

impl RoiQuestion {
    pub fn step(&self) -> Step {
        let idx = Self::all().iter().position(|q| q == self).unwrap_or(0);
        Step::new(idx as u8 + 1, Self::all().len() as u8)
    }
}

impl Choice for RoiQuestion {
    fn all() -> &'static [Self] {
        &[
            RoiQuestion::OrganizationSize,
            RoiQuestion::UseCase,
            RoiQuestion::Scope,
            RoiQuestion::Figures,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            RoiQuestion::OrganizationSize => "organization_size",
            RoiQuestion::UseCase => "use_case",
            RoiQuestion::Scope => "scope",
            RoiQuestion::Figures => "figures",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RoiQuestion::OrganizationSize => "Organization Size",
            RoiQuestion::UseCase => "Primary Use Case",
            RoiQuestion::Scope => "Implementation Scope",
            RoiQuestion::Figures => "Operating Figures",
        }
    }
}

/// One clickable option card of the ROI calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoiOption {
    OrganizationSize(OrganizationSize),
    UseCase(UseCase),
    Scope(ImplementationScope),
}

impl RoiOption {
    pub fn all() -> Vec<RoiOption> {
        let mut options = Vec::new();
        options.extend(OrganizationSize::all().iter().map(|o| Self::OrganizationSize(*o)));
        options.extend(UseCase::all().iter().map(|o| Self::UseCase(*o)));
        options.extend(ImplementationScope::all().iter().map(|o| Self::Scope(*o)));
        options
    }

    pub fn question(&self) -> RoiQuestion {
        match self {
            Self::OrganizationSize(_) => RoiQuestion::OrganizationSize,
            Self::UseCase(_) => RoiQuestion::UseCase,
            Self::Scope(_) => RoiQuestion::Scope,
        }
    }

    pub fn option_slug(&self) -> &'static str {
        match self {
            Self::OrganizationSize(o) => o.slug(),
            Self::UseCase(o) => o.slug(),
            Self::Scope(o) => o.slug(),
        }
    }

    /// Parses the `question.option` form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::invalid_format("roi_option", s.to_string());
        let (question, option) = s.split_once('.').ok_or_else(invalid)?;
        let parsed = match RoiQuestion::from_slug(question).ok_or_else(invalid)? {
            RoiQuestion::OrganizationSize => {
                OrganizationSize::from_slug(option).map(Self::OrganizationSize)
            }
            RoiQuestion::UseCase => UseCase::from_slug(option).map(Self::UseCase),
            RoiQuestion::Scope => ImplementationScope::from_slug(option).map(Self::Scope),
            RoiQuestion::Figures => None,
        };
        parsed.ok_or_else(invalid)
    }
}

impl fmt::Display for RoiOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.question().slug(), self.option_slug())
    }
}
