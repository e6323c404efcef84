//! Assessment categories and question identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Choice, Step, ValidationError};

/// Questions asked in each category.
pub const QUESTIONS_PER_CATEGORY: u8 = 5;

/// The five readiness categories, one per wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalInfrastructure,
    DataReadiness,
    OrganizationalAlignment,
    UseCases,
    Governance,
}

impl Category {
    /// The step that shows this category.
    pub fn step(&self) -> Step {
        let idx = Self::all().iter().position(|c| c == self).unwrap_or(0);
        Step::new(idx as u8 + 1, Self::all().len() as u8)
    }

    /// The category shown on a given step.
    pub fn for_step(step: Step) -> Category {
        let all = Self::all();
        all[step.index().min(all.len() - 1)]
    }
}

impl Choice for Category {
    fn all() -> &'static [Self] {
        &[
            Category::TechnicalInfrastructure,
            Category::DataReadiness,
            Category::OrganizationalAlignment,
            Category::UseCases,
            Category::Governance,
        ]
    }

    fn slug(&self) -> &'static str {
        match self {
            Category::TechnicalInfrastructure => "technical_infrastructure",
            Category::DataReadiness => "data_readiness",
            Category::OrganizationalAlignment => "organizational_alignment",
            Category::UseCases => "use_cases",
            Category::Governance => "governance",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Category::TechnicalInfrastructure => "Technical Infrastructure",
            Category::DataReadiness => "Data Readiness",
            Category::OrganizationalAlignment => "Organizational Alignment",
            Category::UseCases => "Use Cases",
            Category::Governance => "Governance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifies one question: its category and 1-based number within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionId {
    category: Category,
    number: u8,
}

impl QuestionId {
    /// Creates a QuestionId, rejecting numbers outside the category.
    pub fn try_new(category: Category, number: u8) -> Result<Self, ValidationError> {
        if number == 0 || number > QUESTIONS_PER_CATEGORY {
            return Err(ValidationError::out_of_range(
                "question",
                1,
                i32::from(QUESTIONS_PER_CATEGORY),
                i32::from(number),
            ));
        }
        Ok(Self { category, number })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// All questions of a category in order.
    pub fn all_in(category: Category) -> impl Iterator<Item = QuestionId> {
        (1..=QUESTIONS_PER_CATEGORY).map(move |number| QuestionId { category, number })
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category.slug(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_its_own_step() {
        for (i, category) in Category::all().iter().enumerate() {
            assert_eq!(category.step().value() as usize, i + 1);
            assert_eq!(Category::for_step(category.step()), *category);
        }
    }

    #[test]
    fn question_numbers_are_bounded() {
        assert!(QuestionId::try_new(Category::Governance, 0).is_err());
        assert!(QuestionId::try_new(Category::Governance, 6).is_err());
        assert!(QuestionId::try_new(Category::Governance, 5).is_ok());
    }

    #[test]
    fn all_in_lists_five_questions() {
        let questions: Vec<_> = QuestionId::all_in(Category::DataReadiness).collect();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[4].to_string(), "data_readiness.5");
    }
}
