//! MaturityLevel enum: a label bucketed from a 1-5 score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Choice, Score};

/// Five AI maturity levels, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    #[default]
    Experimental,
    Functional,
    Integrated,
    Scalable,
    Transformative,
}

impl MaturityLevel {
    /// Returns all levels in ascending order.
    pub fn all() -> &'static [MaturityLevel] {
        &[
            MaturityLevel::Experimental,
            MaturityLevel::Functional,
            MaturityLevel::Integrated,
            MaturityLevel::Scalable,
            MaturityLevel::Transformative,
        ]
    }

    /// Buckets a score into one of the five fixed ranges.
    ///
    /// `< 1.5` Experimental, `< 2.5` Functional, `< 3.5` Integrated,
    /// `< 4.5` Scalable, otherwise Transformative. Buckets the displayed
    /// one-decimal value so the label always matches the printed score.
    pub fn from_score(score: Score) -> Self {
        let v = score.rounded();
        if v < 1.5 {
            MaturityLevel::Experimental
        } else if v < 2.5 {
            MaturityLevel::Functional
        } else if v < 3.5 {
            MaturityLevel::Integrated
        } else if v < 4.5 {
            MaturityLevel::Scalable
        } else {
            MaturityLevel::Transformative
        }
    }

    /// Returns the level one step higher, saturating at Transformative.
    pub fn advance(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|l| l == self).unwrap_or(0);
        all[(idx + 1).min(all.len() - 1)]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::Experimental => "Experimental",
            MaturityLevel::Functional => "Functional",
            MaturityLevel::Integrated => "Integrated",
            MaturityLevel::Scalable => "Scalable",
            MaturityLevel::Transformative => "Transformative",
        }
    }
}

impl Choice for MaturityLevel {
    fn all() -> &'static [Self] {
        MaturityLevel::all()
    }

    fn slug(&self) -> &'static str {
        match self {
            MaturityLevel::Experimental => "experimental",
            MaturityLevel::Functional => "functional",
            MaturityLevel::Integrated => "integrated",
            MaturityLevel::Scalable => "scalable",
            MaturityLevel::Transformative => "transformative",
        }
    }

    fn label(&self) -> &'static str {
        MaturityLevel::label(self)
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
