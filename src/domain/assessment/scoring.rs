//! Readiness scoring - pure functions over `AssessmentData`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Choice, MaturityLevel, Score};

use super::category::{Category, QUESTIONS_PER_CATEGORY};
use super::data::AssessmentData;
use super::recommendations::recommendations_for;

/// Score summary for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: Option<Score>,
    pub answered: usize,
    pub complete: bool,
}

/// The lowest-scoring answered category and what to do about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub category: Category,
    pub score: Score,
    pub recommendations: Vec<String>,
}

/// Everything the results section and report need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub categories: Vec<CategoryScore>,
    pub overall: Option<Score>,
    pub maturity: Option<MaturityLevel>,
    pub focus: Option<FocusArea>,
}

/// Calculator for readiness scores.
pub struct AssessmentScorer;

impl AssessmentScorer {
    /// Mean of answered values in a category, clamped to the 1-5 scale.
    pub fn category_score(data: &AssessmentData, category: Category) -> Option<Score> {
        Score::mean(
            data.answers_in(category)
                .into_iter()
                .map(|v| f64::from(v.value())),
        )
    }

    /// A category is complete once all of its questions are answered.
    pub fn is_category_complete(data: &AssessmentData, category: Category) -> bool {
        data.answered_count(category) >= usize::from(QUESTIONS_PER_CATEGORY)
    }

    /// Mean of completed category scores only.
    pub fn overall_score(data: &AssessmentData) -> Option<Score> {
        Score::mean(
            Category::all()
                .iter()
                .filter(|c| Self::is_category_complete(data, **c))
                .filter_map(|c| Self::category_score(data, *c))
                .map(|s| s.value()),
        )
    }

    /// Maturity label for the overall score.
    pub fn maturity_level(data: &AssessmentData) -> Option<MaturityLevel> {
        Self::overall_score(data).map(MaturityLevel::from_score)
    }

    /// Lowest-scoring answered category; ties go to the earlier category.
    pub fn priority_focus(data: &AssessmentData) -> Option<FocusArea> {
        let mut lowest: Option<(Category, Score)> = None;
        for category in Category::all() {
            if let Some(score) = Self::category_score(data, *category) {
                match lowest {
                    Some((_, current)) if score.value() >= current.value() => {}
                    _ => lowest = Some((*category, score)),
                }
            }
        }

        lowest.map(|(category, score)| FocusArea {
            category,
            score,
            recommendations: recommendations_for(category)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        })
    }

    /// Computes the full result record.
    pub fn evaluate(data: &AssessmentData) -> AssessmentResult {
        let categories = Category::all()
            .iter()
            .map(|c| CategoryScore {
                category: *c,
                score: Self::category_score(data, *c),
                answered: data.answered_count(*c),
                complete: Self::is_category_complete(data, *c),
            })
            .collect();

        AssessmentResult {
            categories,
            overall: Self::overall_score(data),
            maturity: Self::maturity_level(data),
            focus: Self::priority_focus(data),
        }
    }
}
