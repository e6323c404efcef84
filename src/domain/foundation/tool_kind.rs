//! ToolKind enum representing the four linked wizards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The four wizards of the toolkit, in navigation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Assessment,
    Architecture,
    Roadmap,
    Roi,
}

impl ToolKind {
    /// Returns all tools in navigation order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Assessment,
            ToolKind::Architecture,
            ToolKind::Roadmap,
            ToolKind::Roi,
        ]
    }

    /// Returns the identifier used in storage keys, URLs and element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            ToolKind::Assessment => "assessment",
            ToolKind::Architecture => "architecture",
            ToolKind::Roadmap => "roadmap",
            ToolKind::Roi => "roi",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Assessment => "Readiness Assessment",
            ToolKind::Architecture => "Architecture Decision Helper",
            ToolKind::Roadmap => "Roadmap Generator",
            ToolKind::Roi => "ROI Calculator",
        }
    }

    /// Returns the static page that hosts this wizard.
    pub fn page_path(&self) -> &'static str {
        match self {
            ToolKind::Assessment => "readiness-assessment/index.html",
            ToolKind::Architecture => "architecture-helper/index.html",
            ToolKind::Roadmap => "roadmap-generator/index.html",
            ToolKind::Roi => "roi-calculator/index.html",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ToolKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::all()
            .iter()
            .find(|tool| tool.slug() == s)
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("tool", format!("unknown tool '{}'", s)))
    }
}
