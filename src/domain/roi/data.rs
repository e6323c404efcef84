//! RoiData - the ROI calculator's persisted record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Choice, OrganizationSize, Step, ToolKind, UseCase, ValidationError,
};
use crate::domain::toolkit::Wizard;

use super::options::{ImplementationScope, RoiFigure, RoiHorizon, RoiOption, RoiQuestion};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiData {
    pub current_step: Step,
    pub organization_size: Option<OrganizationSize>,
    pub use_case: Option<UseCase>,
    pub scope: Option<ImplementationScope>,
    pub staff_count: Option<f64>,
    pub hours_saved_per_week: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub horizon: RoiHorizon,
}

impl RoiData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every ROI card is single-select.
    pub fn apply(&mut self, option: RoiOption) {
        match option {
            RoiOption::OrganizationSize(size) => self.organization_size = Some(size),
            RoiOption::UseCase(use_case) => self.use_case = Some(use_case),
            RoiOption::Scope(scope) => self.scope = Some(scope),
        }
    }

    pub fn is_selected(&self, option: RoiOption) -> bool {
        match option {
            RoiOption::OrganizationSize(size) => self.organization_size == Some(size),
            RoiOption::UseCase(use_case) => self.use_case == Some(use_case),
            RoiOption::Scope(scope) => self.scope == Some(scope),
        }
    }

    /// Stores a raw input value; the previous value is kept on error.
    pub fn set_figure(&mut self, figure: RoiFigure, raw: &str) -> Result<(), ValidationError> {
        let value = figure.parse_value(raw)?;
        *self.figure_slot(figure) = value;
        Ok(())
    }

    pub fn figure(&self, figure: RoiFigure) -> Option<f64> {
        match figure {
            RoiFigure::StaffCount => self.staff_count,
            RoiFigure::HoursSavedPerWeek => self.hours_saved_per_week,
            RoiFigure::HourlyRate => self.hourly_rate,
        }
    }

    fn figure_slot(&mut self, figure: RoiFigure) -> &mut Option<f64> {
        match figure {
            RoiFigure::StaffCount => &mut self.staff_count,
            RoiFigure::HoursSavedPerWeek => &mut self.hours_saved_per_week,
            RoiFigure::HourlyRate => &mut self.hourly_rate,
        }
    }

    pub fn set_horizon(&mut self, horizon: RoiHorizon) {
        self.horizon = horizon;
    }

    pub fn current_question(&self) -> RoiQuestion {
        let all = RoiQuestion::all();
        all[self.current_step.index().min(all.len() - 1)]
    }
}

impl Wizard for RoiData {
    fn kind(&self) -> ToolKind {
        ToolKind::Roi
    }

    fn total_steps(&self) -> u8 {
        RoiQuestion::all().len() as u8
    }

    fn current_step(&self) -> Step {
        self.current_step
    }

    fn store_step(&mut self, step: Step) {
        self.current_step = step;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.organization_size.is_none() {
            missing.push(RoiQuestion::OrganizationSize.slug());
        }
        if self.use_case.is_none() {
            missing.push(RoiQuestion::UseCase.slug());
        }
        if self.scope.is_none() {
            missing.push(RoiQuestion::Scope.slug());
        }
        for figure in RoiFigure::all() {
            if !self.figure(*figure).is_some_and(|v| v > 0.0) {
                missing.push(figure.slug());
            }
        }
        missing
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn normalize(&mut self) {
        self.current_step = self.current_step.clamped(self.total_steps());
        for figure in RoiFigure::all() {
            let slot = self.figure_slot(*figure);
            if slot.is_some_and(|v| !v.is_finite() || v < 0.0) {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RoiData {
        let mut data = RoiData::new();
        data.apply(RoiOption::OrganizationSize(OrganizationSize::Medium));
        data.apply(RoiOption::UseCase(UseCase::Transcription));
        data.apply(RoiOption::Scope(ImplementationScope::Department));
        data.set_figure(RoiFigure::StaffCount, "10").unwrap();
        data.set_figure(RoiFigure::HoursSavedPerWeek, "5").unwrap();
        data.set_figure(RoiFigure::HourlyRate, "40").unwrap();
        data
    }

    #[test]
    fn complete_when_all_fields_set() {
        assert!(filled().is_complete());
    }

    #[test]
    fn zero_figure_counts_as_missing() {
        let mut data = filled();
        data.set_figure(RoiFigure::HourlyRate, "0").unwrap();
        assert_eq!(data.missing_fields(), vec!["hourly_rate"]);
    }

    #[test]
    fn invalid_figure_keeps_previous_value() {
        let mut data = filled();
        assert!(data.set_figure(RoiFigure::StaffCount, "many").is_err());
        assert_eq!(data.staff_count, Some(10.0));
    }

    #[test]
    fn single_select_replaces() {
        let mut data = filled();
        data.apply(RoiOption::Scope(ImplementationScope::Pilot));
        assert!(data.is_selected(RoiOption::Scope(ImplementationScope::Pilot)));
        assert!(!data.is_selected(RoiOption::Scope(ImplementationScope::Department)));
    }

    #[test]
    fn normalize_drops_negative_figures() {
        let json = r#"{"current_step": 9, "staff_count": -4.0, "hourly_rate": 30.0}"#;
        let mut data: RoiData = serde_json::from_str(json).unwrap();
        data.normalize();
        assert_eq!(data.current_step.value(), 4);
        assert_eq!(data.staff_count, None);
        assert_eq!(data.hourly_rate, Some(30.0));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut data = filled();
        data.set_horizon(RoiHorizon::ThreeYear);
        data.reset();
        assert_eq!(data, RoiData::default());
    }
}
