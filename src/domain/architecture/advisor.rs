//! Architecture Advisor - weighted fit of candidate patterns.
//!
//! Every selected option adds fixed points to each candidate pattern. The
//! pattern with the highest total is recommended; ties go to the pattern
//! declared first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::OrganizationSize;
use crate::domain::toolkit::Wizard;

use super::data::ArchitectureData;
use super::options::{
    Challenge, ContentType, InfrastructurePreference, PrimaryGoal, TeamExpertise,
};

/// Candidate reference architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchitecturePattern {
    ManagedServices,
    CloudNative,
    HybridPlatform,
    OnPremiseStack,
}

impl ArchitecturePattern {
    pub fn all() -> &'static [ArchitecturePattern] {
        &[
            ArchitecturePattern::ManagedServices,
            ArchitecturePattern::CloudNative,
            ArchitecturePattern::HybridPlatform,
            ArchitecturePattern::OnPremiseStack,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ArchitecturePattern::ManagedServices => "managed_services",
            ArchitecturePattern::CloudNative => "cloud_native",
            ArchitecturePattern::HybridPlatform => "hybrid_platform",
            ArchitecturePattern::OnPremiseStack => "on_premise_stack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArchitecturePattern::ManagedServices => "Managed AI Services",
            ArchitecturePattern::CloudNative => "Cloud-Native AI Platform",
            ArchitecturePattern::HybridPlatform => "Hybrid AI Platform",
            ArchitecturePattern::OnPremiseStack => "On-Premise AI Stack",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ArchitecturePattern::ManagedServices => {
                "Consume vendor AI APIs through a thin integration layer; fastest start, least to operate."
            }
            ArchitecturePattern::CloudNative => {
                "Build on a cloud ML platform with managed pipelines, model hosting and elastic compute."
            }
            ArchitecturePattern::HybridPlatform => {
                "Keep sensitive archives and legacy systems on-site while bursting training and inference to the cloud."
            }
            ArchitecturePattern::OnPremiseStack => {
                "Run models on owned GPU infrastructure for full control over data residency and latency."
            }
        }
    }

    fn slot(&self) -> usize {
        match self {
            ArchitecturePattern::ManagedServices => 0,
            ArchitecturePattern::CloudNative => 1,
            ArchitecturePattern::HybridPlatform => 2,
            ArchitecturePattern::OnPremiseStack => 3,
        }
    }
}

impl fmt::Display for ArchitecturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Points per pattern, in `ArchitecturePattern::all()` order.
type Weights = [u32; 4];

fn content_weights(c: ContentType) -> Weights {
    match c {
        ContentType::News => [2, 1, 1, 0],
        ContentType::Video => [0, 3, 2, 1],
        ContentType::Audio => [1, 2, 1, 1],
        ContentType::Images => [2, 2, 1, 0],
        ContentType::Archive => [0, 1, 2, 3],
    }
}

fn goal_weights(g: PrimaryGoal) -> Weights {
    match g {
        PrimaryGoal::ProductionEfficiency => [3, 1, 1, 0],
        PrimaryGoal::AudienceEngagement => [1, 3, 1, 0],
        PrimaryGoal::ContentDiscovery => [1, 2, 2, 1],
        PrimaryGoal::Monetization => [2, 2, 1, 0],
    }
}

fn size_weights(s: OrganizationSize) -> Weights {
    match s {
        OrganizationSize::Small => [4, 1, 0, 0],
        OrganizationSize::Medium => [2, 3, 1, 0],
        OrganizationSize::Large => [0, 2, 3, 1],
        OrganizationSize::Enterprise => [0, 1, 3, 3],
    }
}

fn infrastructure_weights(i: InfrastructurePreference) -> Weights {
    match i {
        InfrastructurePreference::CloudFirst => [2, 4, 0, 0],
        InfrastructurePreference::Hybrid => [0, 1, 4, 1],
        InfrastructurePreference::OnPremise => [0, 0, 1, 5],
    }
}

fn expertise_weights(e: TeamExpertise) -> Weights {
    match e {
        TeamExpertise::Limited => [4, 0, 0, 0],
        TeamExpertise::Moderate => [1, 2, 2, 0],
        TeamExpertise::Advanced => [0, 3, 1, 2],
    }
}

fn challenge_weights(c: Challenge) -> Weights {
    match c {
        Challenge::DataSilos => [0, 1, 2, 0],
        Challenge::LegacySystems => [0, 0, 3, 1],
        Challenge::SkillsGap => [3, 0, 0, 0],
        Challenge::BudgetConstraints => [3, 1, 0, 0],
        Challenge::RegulatoryCompliance => [0, 0, 1, 3],
        Challenge::RealTimeLatency => [0, 2, 0, 1],
    }
}

/// Mitigation note shown for each selected challenge.
pub fn challenge_consideration(c: Challenge) -> &'static str {
    match c {
        Challenge::DataSilos => "Plan a shared content lake or federated catalog before scaling models.",
        Challenge::LegacySystems => "Wrap legacy CMS and MAM systems behind integration APIs early.",
        Challenge::SkillsGap => "Budget for training and vendor support during the first phase.",
        Challenge::BudgetConstraints => "Start with pay-per-use services and defer fixed infrastructure.",
        Challenge::RegulatoryCompliance => "Keep personal and rights-restricted data in controlled regions.",
        Challenge::RealTimeLatency => "Place inference close to playout and publishing systems.",
    }
}

/// Points earned by one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFit {
    pub pattern: ArchitecturePattern,
    pub points: u32,
    /// Share of the best pattern's points, 0-100.
    pub relative_fit: u8,
}

/// The helper's derived result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureRecommendation {
    pub pattern: ArchitecturePattern,
    pub summary: String,
    pub fits: Vec<PatternFit>,
    pub considerations: Vec<String>,
}

/// Pure scoring over `ArchitectureData`.
pub struct ArchitectureAdvisor;

impl ArchitectureAdvisor {
    /// Totals per pattern for whatever has been answered so far.
    pub fn fit_scores(data: &ArchitectureData) -> Vec<PatternFit> {
        let mut totals: Weights = [0; 4];
        let mut add = |w: Weights| {
            for (total, points) in totals.iter_mut().zip(w) {
                *total += points;
            }
        };

        for c in &data.content_types {
            add(content_weights(*c));
        }
        if let Some(g) = data.primary_goal {
            add(goal_weights(g));
        }
        if let Some(s) = data.organization_size {
            add(size_weights(s));
        }
        if let Some(i) = data.infrastructure {
            add(infrastructure_weights(i));
        }
        if let Some(e) = data.team_expertise {
            add(expertise_weights(e));
        }
        for c in &data.challenges {
            add(challenge_weights(*c));
        }

        let best = totals.iter().copied().max().unwrap_or(0);
        ArchitecturePattern::all()
            .iter()
            .map(|p| {
                let points = totals[p.slot()];
                let relative_fit = if best == 0 {
                    0
                } else {
                    ((points * 100) / best) as u8
                };
                PatternFit {
                    pattern: *p,
                    points,
                    relative_fit,
                }
            })
            .collect()
    }

    /// Recommends a pattern once every required question is answered.
    pub fn recommend(data: &ArchitectureData) -> Option<ArchitectureRecommendation> {
        if !data.is_complete() {
            return None;
        }

        let fits = Self::fit_scores(data);
        // max_by_key keeps the last maximum, so walk in reverse to prefer earlier patterns
        let pattern = fits
            .iter()
            .rev()
            .max_by_key(|f| f.points)
            .map(|f| f.pattern)?;

        Some(ArchitectureRecommendation {
            pattern,
            summary: pattern.summary().to_string(),
            fits,
            considerations: data
                .challenges
                .iter()
                .map(|c| challenge_consideration(*c).to_string())
                .collect(),
        })
    }
}
