//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `toolkit` - The Wizard contract and the shared ToolkitState record
//! - `assessment` - Readiness assessment answers and scoring
//! - `architecture` - Architecture decision helper and pattern fit
//! - `roadmap` - Roadmap generator and phase planning
//! - `roi` - ROI calculator and multiplier tables
//! - `report` - Downloadable per-tool report snapshots

pub mod architecture;
pub mod assessment;
pub mod foundation;
pub mod report;
pub mod roadmap;
pub mod roi;
pub mod toolkit;
