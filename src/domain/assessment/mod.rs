//! Readiness assessment wizard.
//!
//! Five categories of five questions each, answered on a 1-5 scale. Category
//! scores are means of the answered questions; the overall score averages
//! completed categories only and buckets into a maturity level.

mod category;
mod data;
mod recommendations;
mod scoring;

pub use category::{Category, QuestionId, QUESTIONS_PER_CATEGORY};
pub use data::AssessmentData;
pub use recommendations::recommendations_for;
pub use scoring::{AssessmentResult, AssessmentScorer, CategoryScore, FocusArea};
