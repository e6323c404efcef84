//! Wizard trait - the contract every per-tool data record fulfils.

use crate::domain::foundation::{Step, ToolKind};

/// A multi-step form flow with persisted answers and a derived result.
///
/// Implementors are plain data records; the trait supplies step navigation
/// and completion checks on top of a handful of accessors.
pub trait Wizard {
    /// Which tool this record belongs to.
    fn kind(&self) -> ToolKind;

    /// Number of steps in this wizard.
    fn total_steps(&self) -> u8;

    /// The step currently shown.
    fn current_step(&self) -> Step;

    /// Overwrites the stored step without range checks.
    fn store_step(&mut self, step: Step);

    /// Names of required fields that are still unset.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Clears all answers and returns to the first step.
    fn reset(&mut self);

    /// Repairs invariants after loading untrusted data.
    fn normalize(&mut self) {
        let step = self.current_step().clamped(self.total_steps());
        self.store_step(step);
    }

    /// A tool is complete only when every required field is set.
    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Moves to a specific step, clamped into range.
    fn go_to(&mut self, step: u8) -> Step {
        let step = Step::new(step, self.total_steps());
        self.store_step(step);
        step
    }

    /// Advances one step, stopping at the last.
    fn next_step(&mut self) -> Step {
        let step = self.current_step().next(self.total_steps());
        self.store_step(step);
        step
    }

    /// Goes back one step, stopping at the first.
    fn previous_step(&mut self) -> Step {
        let step = self.current_step().previous();
        self.store_step(step);
        step
    }

    /// True when the wizard sits on its final step.
    fn on_last_step(&self) -> bool {
        self.current_step().is_last(self.total_steps())
    }
}
