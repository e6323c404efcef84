//! Questions and option enums of the architecture decision helper.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Choice, OrganizationSize, Step, ValidationError};

/// Kinds of content the organization wants AI to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    News,
    Video,
    Audio,
    Images,
    Archive,
}

impl Choice for ContentType {
    fn all() -> &'static [Self] {
        &[
            ContentType::News,
            ContentType::Video,
            ContentType::Audio,
            ContentType::Images,
            ContentType::Archive,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Images => "images",
            ContentType::Archive => "archive",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContentType::News => "News & Articles",
            ContentType::Video => "Video",
            ContentType::Audio => "Audio & Podcasts",
            ContentType::Images => "Images & Graphics",
            ContentType::Archive => "Historical Archive",
        }
    }
}

/// What the AI investment should mainly achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    ProductionEfficiency,
    AudienceEngagement,
    ContentDiscovery,
    Monetization,
}

impl Choice for PrimaryGoal {
    fn all() -> &'static [Self] {
        &[
            PrimaryGoal::ProductionEfficiency,
            PrimaryGoal::AudienceEngagement,
            PrimaryGoal::ContentDiscovery,
            PrimaryGoal::Monetization,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            PrimaryGoal::ProductionEfficiency => "production_efficiency",
            PrimaryGoal::AudienceEngagement => "audience_engagement",
            PrimaryGoal::ContentDiscovery => "content_discovery",
            PrimaryGoal::Monetization => "monetization",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::ProductionEfficiency => "Production Efficiency",
            PrimaryGoal::AudienceEngagement => "Audience Engagement",
            PrimaryGoal::ContentDiscovery => "Content Discovery",
            PrimaryGoal::Monetization => "Monetization",
        }
    }
}

/// Where workloads should preferably run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructurePreference {
    CloudFirst,
    Hybrid,
    OnPremise,
}

impl Choice for InfrastructurePreference {
    fn all() -> &'static [Self] {
        &[
            InfrastructurePreference::CloudFirst,
            InfrastructurePreference::Hybrid,
            InfrastructurePreference::OnPremise,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            InfrastructurePreference::CloudFirst => "cloud_first",
            InfrastructurePreference::Hybrid => "hybrid",
            InfrastructurePreference::OnPremise => "on_premise",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InfrastructurePreference::CloudFirst => "Cloud First",
            InfrastructurePreference::Hybrid => "Hybrid",
            InfrastructurePreference::OnPremise => "On-Premise",
        }
    }
}

/// In-house AI/engineering expertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamExpertise {
    Limited,
    Moderate,
    Advanced,
}

impl Choice for TeamExpertise {
    fn all() -> &'static [Self] {
        &[
            TeamExpertise::Limited,
            TeamExpertise::Moderate,
            TeamExpertise::Advanced,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            TeamExpertise::Limited => "limited",
            TeamExpertise::Moderate => "moderate",
            TeamExpertise::Advanced => "advanced",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TeamExpertise::Limited => "Limited",
            TeamExpertise::Moderate => "Moderate",
            TeamExpertise::Advanced => "Advanced",
        }
    }
}

/// Known obstacles. Multi-select, optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Challenge {
    DataSilos,
    LegacySystems,
    SkillsGap,
    BudgetConstraints,
    RegulatoryCompliance,
    RealTimeLatency,
}

impl Choice for Challenge {
    fn all() -> &'static [Self] {
        &[
            Challenge::DataSilos,
            Challenge::LegacySystems,
            Challenge::SkillsGap,
            Challenge::BudgetConstraints,
            Challenge::RegulatoryCompliance,
            Challenge::RealTimeLatency,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            Challenge::DataSilos => "data_silos",
            Challenge::LegacySystems => "legacy_systems",
            Challenge::SkillsGap => "skills_gap",
            Challenge::BudgetConstraints => "budget_constraints",
            Challenge::RegulatoryCompliance => "regulatory_compliance",
            Challenge::RealTimeLatency => "real_time_latency",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Challenge::DataSilos => "Data Silos",
            Challenge::LegacySystems => "Legacy Systems",
            Challenge::SkillsGap => "Skills Gap",
            Challenge::BudgetConstraints => "Budget Constraints",
            Challenge::RegulatoryCompliance => "Regulatory Compliance",
            Challenge::RealTimeLatency => "Real-Time Latency",
        }
    }
}

/// The six questions, one per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchitectureQuestion {
    ContentTypes,
    PrimaryGoal,
    OrganizationSize,
    Infrastructure,
    TeamExpertise,
    Challenges,
}

impl ArchitectureQuestion {
    pub fn is_multi_select(&self) -> bool {
        matches!(
            self,
            ArchitectureQuestion::ContentTypes | ArchitectureQuestion::Challenges
        )
    }

    pub fn step(&self) -> Step {
        let idx = Self::all().iter().position(|q| q == self).unwrap_or(0);
        Step::new(idx as u8 + 1, Self::all().len() as u8)
    }
}

impl Choice for ArchitectureQuestion {
    fn all() -> &'static [Self] {
        &[
            ArchitectureQuestion::ContentTypes,
            ArchitectureQuestion::PrimaryGoal,
            ArchitectureQuestion::OrganizationSize,
            ArchitectureQuestion::Infrastructure,
            ArchitectureQuestion::TeamExpertise,
            ArchitectureQuestion::Challenges,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            ArchitectureQuestion::ContentTypes => "content_types",
            ArchitectureQuestion::PrimaryGoal => "primary_goal",
            ArchitectureQuestion::OrganizationSize => "organization_size",
            ArchitectureQuestion::Infrastructure => "infrastructure",
            ArchitectureQuestion::TeamExpertise => "team_expertise",
            ArchitectureQuestion::Challenges => "challenges",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ArchitectureQuestion::ContentTypes => "Content Types",
            ArchitectureQuestion::PrimaryGoal => "Primary Goal",
            ArchitectureQuestion::OrganizationSize => "Organization Size",
            ArchitectureQuestion::Infrastructure => "Infrastructure Preference",
            ArchitectureQuestion::TeamExpertise => "Team Expertise",
            ArchitectureQuestion::Challenges => "Challenges",
        }
    }
}

/// One clickable option card of the architecture helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchitectureOption {
    ContentType(ContentType),
    PrimaryGoal(PrimaryGoal),
    OrganizationSize(OrganizationSize),
    Infrastructure(InfrastructurePreference),
    TeamExpertise(TeamExpertise),
    Challenge(Challenge),
}

impl ArchitectureOption {
    /// Every option card, grouped by question.
    pub fn all() -> Vec<ArchitectureOption> {
        let mut options = Vec::new();
        options.extend(ContentType::all().iter().map(|o| Self::ContentType(*o)));
        options.extend(PrimaryGoal::all().iter().map(|o| Self::PrimaryGoal(*o)));
        options.extend(OrganizationSize::all().iter().map(|o| Self::OrganizationSize(*o)));
        options.extend(InfrastructurePreference::all().iter().map(|o| Self::Infrastructure(*o)));
        options.extend(TeamExpertise::all().iter().map(|o| Self::TeamExpertise(*o)));
        options.extend(Challenge::all().iter().map(|o| Self::Challenge(*o)));
        options
    }

    pub fn question(&self) -> ArchitectureQuestion {
        match self {
            Self::ContentType(_) => ArchitectureQuestion::ContentTypes,
            Self::PrimaryGoal(_) => ArchitectureQuestion::PrimaryGoal,
            Self::OrganizationSize(_) => ArchitectureQuestion::OrganizationSize,
            Self::Infrastructure(_) => ArchitectureQuestion::Infrastructure,
            Self::TeamExpertise(_) => ArchitectureQuestion::TeamExpertise,
            Self::Challenge(_) => ArchitectureQuestion::Challenges,
        }
    }

    pub fn option_slug(&self) -> &'static str {
        match self {
            Self::ContentType(o) => o.slug(),
            Self::PrimaryGoal(o) => o.slug(),
            Self::OrganizationSize(o) => o.slug(),
            Self::Infrastructure(o) => o.slug(),
            Self::TeamExpertise(o) => o.slug(),
            Self::Challenge(o) => o.slug(),
        }
    }

    /// Parses the `question.option` form.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::invalid_format("architecture_option", s.to_string());
        let (question, option) = s.split_once('.').ok_or_else(invalid)?;
        let question = ArchitectureQuestion::from_slug(question).ok_or_else(invalid)?;
        let parsed = match question {
            ArchitectureQuestion::ContentTypes => ContentType::from_slug(option).map(Self::ContentType),
            ArchitectureQuestion::PrimaryGoal => PrimaryGoal::from_slug(option).map(Self::PrimaryGoal),
            ArchitectureQuestion::OrganizationSize => {
                OrganizationSize::from_slug(option).map(Self::OrganizationSize)
            }
            ArchitectureQuestion::Infrastructure => {
                InfrastructurePreference::from_slug(option).map(Self::Infrastructure)
            }
            ArchitectureQuestion::TeamExpertise => TeamExpertise::from_slug(option).map(Self::TeamExpertise),
            ArchitectureQuestion::Challenges => Challenge::from_slug(option).map(Self::Challenge),
        };
        parsed.ok_or_else(invalid)
    }
}

impl fmt::Display for ArchitectureOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.question().slug(), self.option_slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_option_parses_from_its_display_form() {
        for option in ArchitectureOption::all() {
            assert_eq!(ArchitectureOption::parse(&option.to_string()).unwrap(), option);
        }
    }

    #[test]
    fn parse_rejects_mismatched_question() {
        assert!(ArchitectureOption::parse("challenges.video").is_err());
        assert!(ArchitectureOption::parse("video").is_err());
    }

    #[test]
    fn only_content_and_challenges_are_multi_select() {
        let multi: Vec<_> = ArchitectureQuestion::all()
            .iter()
            .filter(|q| q.is_multi_select())
            .collect();
        assert_eq!(multi.len(), 2);
    }

    #[test]
    fn questions_map_to_consecutive_steps() {
        assert_eq!(ArchitectureQuestion::ContentTypes.step().value(), 1);
        assert_eq!(ArchitectureQuestion::Challenges.step().value(), 6);
    }
}
