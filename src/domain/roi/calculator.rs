//! ROI Calculator - cost, benefit and payback from fixed multiplier tables.
//!
//! ```text
//! implementation_cost  = BASE_COST × size × use case × scope
//! annual_gross_benefit = staff × hours/week × 52 × hourly rate
//! year_one_benefit     = annual_gross_benefit × ADOPTION_RAMP
//! annual_maintenance   = implementation_cost × MAINTENANCE_RATE
//! payback_months       = implementation_cost / (year_one_benefit / 12)
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrganizationSize, UseCase};
use crate::domain::toolkit::Wizard;

use super::data::RoiData;
use super::options::{ImplementationScope, RoiHorizon};

pub const BASE_COST: f64 = 50_000.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Share of the full benefit realized in the first year.
pub const ADOPTION_RAMP: f64 = 0.6;
pub const MAINTENANCE_RATE: f64 = 0.2;

pub fn size_multiplier(size: OrganizationSize) -> f64 {
    match size {
        OrganizationSize::Small => 0.5,
        OrganizationSize::Medium => 1.0,
        OrganizationSize::Large => 2.0,
        OrganizationSize::Enterprise => 3.5,
    }
}

pub fn use_case_multiplier(use_case: UseCase) -> f64 {
    match use_case {
        UseCase::ContentTagging => 0.8,
        UseCase::Transcription => 0.9,
        UseCase::ArchiveSearch => 1.0,
        UseCase::Moderation => 1.1,
        UseCase::Personalization => 1.3,
        UseCase::ContentGeneration => 1.5,
    }
}

pub fn scope_multiplier(scope: ImplementationScope) -> f64 {
    match scope {
        ImplementationScope::Pilot => 0.4,
        ImplementationScope::Department => 1.0,
        ImplementationScope::Enterprise => 2.5,
    }
}

/// Derived ROI figures for one set of answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub implementation_cost: f64,
    pub annual_gross_benefit: f64,
    pub year_one_benefit: f64,
    pub annual_maintenance: f64,
    /// `None` when the first year brings no benefit.
    pub payback_months: Option<f64>,
    pub horizon: RoiHorizon,
    pub horizon_benefit: f64,
    pub horizon_cost: f64,
    pub net_benefit: f64,
    pub roi_percent: f64,
}

pub struct RoiCalculator;

impl RoiCalculator {
    pub fn implementation_cost(
        size: OrganizationSize,
        use_case: UseCase,
        scope: ImplementationScope,
    ) -> f64 {
        BASE_COST * size_multiplier(size) * use_case_multiplier(use_case) * scope_multiplier(scope)
    }

    pub fn annual_gross_benefit(staff: f64, hours_per_week: f64, hourly_rate: f64) -> f64 {
        staff * hours_per_week * WEEKS_PER_YEAR * hourly_rate
    }

    pub fn payback_months(implementation_cost: f64, year_one_benefit: f64) -> Option<f64> {
        if year_one_benefit <= 0.0 {
            return None;
        }
        Some(implementation_cost / (year_one_benefit / 12.0))
    }

    /// Benefit and cost over the horizon.
    ///
    /// Year one is ramped; later years earn the full gross benefit. Every
    /// year pays maintenance on top of the one-off implementation cost.
    fn horizon_totals(
        horizon: RoiHorizon,
        implementation_cost: f64,
        annual_gross_benefit: f64,
        year_one_benefit: f64,
        annual_maintenance: f64,
    ) -> (f64, f64) {
        let years = f64::from(horizon.years());
        let benefit = year_one_benefit + annual_gross_benefit * (years - 1.0);
        let cost = implementation_cost + annual_maintenance * years;
        (benefit, cost)
    }

    /// Computes the result once every input is present.
    pub fn calculate(data: &RoiData) -> Option<RoiResult> {
        if !data.is_complete() {
            return None;
        }
        let implementation_cost =
            Self::implementation_cost(data.organization_size?, data.use_case?, data.scope?);
        let annual_gross_benefit = Self::annual_gross_benefit(
            data.staff_count?,
            data.hours_saved_per_week?,
            data.hourly_rate?,
        );
        let year_one_benefit = annual_gross_benefit * ADOPTION_RAMP;
        let annual_maintenance = implementation_cost * MAINTENANCE_RATE;

        let (horizon_benefit, horizon_cost) = Self::horizon_totals(
            data.horizon,
            implementation_cost,
            annual_gross_benefit,
            year_one_benefit,
            annual_maintenance,
        );
        let net_benefit = horizon_benefit - horizon_cost;
        let roi_percent = if horizon_cost > 0.0 {
            net_benefit / horizon_cost * 100.0
        } else {
            0.0
        };

        Some(RoiResult {
            implementation_cost,
            annual_gross_benefit,
            year_one_benefit,
            annual_maintenance,
            payback_months: Self::payback_months(implementation_cost, year_one_benefit),
            horizon: data.horizon,
            horizon_benefit,
            horizon_cost,
            net_benefit,
            roi_percent,
        })
    }
}
