//! Implementation roadmap generator.
//!
//! Four questions produce a phased plan whose length depends on the chosen
//! timeline and team capacity.

mod data;
mod options;
mod planner;

pub use data::RoadmapData;
pub use options::{
    RoadmapOption, RoadmapQuestion, TeamCapacity, Timeline, MAX_PRIORITY_USE_CASES,
};
pub use planner::{PhaseKind, RoadmapPhase, RoadmapPlan, RoadmapPlanner};
