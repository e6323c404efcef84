//! ROI calculator wizard.

mod calculator;
mod data;
mod options;

pub use calculator::{
    scope_multiplier, size_multiplier, use_case_multiplier, RoiCalculator, RoiResult,
    ADOPTION_RAMP, BASE_COST, MAINTENANCE_RATE, WEEKS_PER_YEAR,
};
pub use data::RoiData;
pub use options::{ImplementationScope, RoiFigure, RoiHorizon, RoiOption, RoiQuestion};
