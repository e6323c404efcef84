//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the toolkit domain.

mod choice;
mod errors;
mod ids;
mod maturity;
mod score;
mod step;
mod timestamp;
mod tool_kind;

pub use choice::{Choice, OrganizationSize, UseCase};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ReportId;
pub use maturity::MaturityLevel;
pub use score::{AnswerValue, Score, SCALE_MAX, SCALE_MIN};
pub use step::Step;
pub use timestamp::Timestamp;
pub use tool_kind::ToolKind;
