//! AssessmentData - the readiness assessment's persisted record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnswerValue, Choice, Step, ToolKind};
use crate::domain::toolkit::Wizard;

use super::category::{Category, QuestionId, QUESTIONS_PER_CATEGORY};

/// Answers keyed by category, then by question number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentData {
    pub current_step: Step,
    pub answers: BTreeMap<Category, BTreeMap<u8, AnswerValue>>,
}

impl AssessmentData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer. Answering again replaces the earlier value.
    pub fn answer(&mut self, question: QuestionId, value: AnswerValue) {
        self.answers
            .entry(question.category())
            .or_default()
            .insert(question.number(), value);
    }

    /// Returns the recorded answer for a question.
    pub fn answer_for(&self, question: QuestionId) -> Option<AnswerValue> {
        self.answers
            .get(&question.category())
            .and_then(|qs| qs.get(&question.number()))
            .copied()
    }

    /// Answered values in a category, in question order.
    pub fn answers_in(&self, category: Category) -> Vec<AnswerValue> {
        self.answers
            .get(&category)
            .map(|qs| qs.values().copied().collect())
            .unwrap_or_default()
    }

    /// Number of answered questions in a category.
    pub fn answered_count(&self, category: Category) -> usize {
        self.answers.get(&category).map_or(0, |qs| qs.len())
    }

    /// The category on the current step.
    pub fn current_category(&self) -> Category {
        Category::for_step(self.current_step)
    }
}

impl Wizard for AssessmentData {
    fn kind(&self) -> ToolKind {
        ToolKind::Assessment
    }

    fn total_steps(&self) -> u8 {
        Category::all().len() as u8
    }

    fn current_step(&self) -> Step {
        self.current_step
    }

    fn store_step(&mut self, step: Step) {
        self.current_step = step;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        Category::all()
            .iter()
            .filter(|c| self.answered_count(**c) < usize::from(QUESTIONS_PER_CATEGORY))
            .map(|c| c.slug())
            .collect()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn normalize(&mut self) {
        self.current_step = self.current_step.clamped(self.total_steps());
        for questions in self.answers.values_mut() {
            questions.retain(|number, _| (1..=QUESTIONS_PER_CATEGORY).contains(number));
        }
        self.answers.retain(|_, questions| !questions.is_empty());
    }
}
