//! Architecture decision helper wizard.
//!
//! Six questions, one per step. Selected options add fixed points to four
//! candidate architecture patterns; the best fit is recommended.

mod advisor;
mod data;
mod options;

pub use advisor::{
    challenge_consideration, ArchitectureAdvisor, ArchitecturePattern, ArchitectureRecommendation,
    PatternFit,
};
pub use data::ArchitectureData;
pub use options::{
    ArchitectureOption, ArchitectureQuestion, Challenge, ContentType, InfrastructurePreference,
    PrimaryGoal, TeamExpertise,
};
