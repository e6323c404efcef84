//! Choice trait and the option enums shared by several wizards.

use serde::{Deserialize, Serialize};

/// A closed set of options a user can pick on an option card.
///
/// Slugs are the stable textual form used in element ids and JSON.
pub trait Choice: Copy + Eq + 'static {
    /// Every option in display order.
    fn all() -> &'static [Self];

    /// Stable identifier.
    fn slug(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Looks an option up by slug.
    fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().find(|c| c.slug() == slug).copied()
    }
}

/// Organization size, used by the architecture helper and ROI calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationSize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl Choice for OrganizationSize {
    fn all() -> &'static [Self] {
        &[
            OrganizationSize::Small,
            OrganizationSize::Medium,
            OrganizationSize::Large,
            OrganizationSize::Enterprise,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            OrganizationSize::Small => "small",
            OrganizationSize::Medium => "medium",
            OrganizationSize::Large => "large",
            OrganizationSize::Enterprise => "enterprise",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OrganizationSize::Small => "Small (under 50 staff)",
            OrganizationSize::Medium => "Medium (50-250 staff)",
            OrganizationSize::Large => "Large (250-1,000 staff)",
            OrganizationSize::Enterprise => "Enterprise (1,000+ staff)",
        }
    }
}

/// Media AI use cases, used by the roadmap generator and ROI calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    ContentTagging,
    Transcription,
    ArchiveSearch,
    Moderation,
    Personalization,
    ContentGeneration,
}

impl Choice for UseCase {
    fn all() -> &'static [Self] {
        &[
            UseCase::ContentTagging,
            UseCase::Transcription,
            UseCase::ArchiveSearch,
            UseCase::Moderation,
            UseCase::Personalization,
            UseCase::ContentGeneration,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            UseCase::ContentTagging => "content_tagging",
            UseCase::Transcription => "transcription",
            UseCase::ArchiveSearch => "archive_search",
            UseCase::Moderation => "moderation",
            UseCase::Personalization => "personalization",
            UseCase::ContentGeneration => "content_generation",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UseCase::ContentTagging => "Automated Metadata Tagging",
            UseCase::Transcription => "Transcription & Captioning",
            UseCase::ArchiveSearch => "Archive Search & Discovery",
            UseCase::Moderation => "Content Moderation",
            UseCase::Personalization => "Audience Personalization",
            UseCase::ContentGeneration => "Assisted Content Generation",
        }
    }
}
