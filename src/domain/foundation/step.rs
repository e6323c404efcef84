//! Step value object: a 1-based position inside a wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A 1-based wizard step.
///
/// The step count lives with each wizard, so every operation that can move
/// the cursor takes the total and keeps the result within `[1, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(u8);

impl Step {
    /// The first step of every wizard.
    pub const FIRST: Self = Self(1);

    /// Creates a step, clamping into `[1, total]`.
    pub fn new(value: u8, total: u8) -> Self {
        Self(value.clamp(1, total.max(1)))
    }

    /// Creates a step, returning error if out of range.
    pub fn try_new(value: u8, total: u8) -> Result<Self, ValidationError> {
        let total = total.max(1);
        if value == 0 || value > total {
            return Err(ValidationError::out_of_range(
                "step",
                1,
                i32::from(total),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the 0-based index, handy for slice lookups.
    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Moves forward one step, stopping at the last.
    pub fn next(self, total: u8) -> Self {
        Self::new(self.0.saturating_add(1), total)
    }

    /// Moves back one step, stopping at the first.
    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }

    /// Re-applies the range invariant, e.g. after deserialization.
    pub fn clamped(self, total: u8) -> Self {
        Self::new(self.0, total)
    }

    /// Returns true if this is the first step.
    pub fn is_first(&self) -> bool {
        self.0 == 1
    }

    /// Returns true if this is the last step for the given total.
    pub fn is_last(&self, total: u8) -> bool {
        self.0 >= total.max(1)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_clamps_into_range() {
        assert_eq!(Step::new(0, 5).value(), 1);
        assert_eq!(Step::new(3, 5).value(), 3);
        assert_eq!(Step::new(9, 5).value(), 5);
    }

    #[test]
    fn try_new_rejects_zero_and_overflow() {
        assert!(Step::try_new(0, 4).is_err());
        assert!(Step::try_new(5, 4).is_err());
        assert_eq!(Step::try_new(4, 4).unwrap().value(), 4);
    }

    #[test]
    fn next_stops_at_last() {
        let step = Step::new(4, 4);
        assert_eq!(step.next(4).value(), 4);
        assert!(step.is_last(4));
    }

    #[test]
    fn previous_stops_at_first() {
        assert_eq!(Step::FIRST.previous(), Step::FIRST);
        assert!(Step::FIRST.is_first());
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(Step::FIRST.index(), 0);
        assert_eq!(Step::new(3, 6).index(), 2);
    }

    #[test]
    fn deserialized_out_of_range_value_is_repaired_by_clamped() {
        let raw: Step = serde_json::from_str("42").unwrap();
        assert_eq!(raw.clamped(6).value(), 6);
        let zero: Step = serde_json::from_str("0").unwrap();
        assert_eq!(zero.clamped(6).value(), 1);
    }

    proptest! {
        #[test]
        fn navigation_never_leaves_range(total in 1u8..10, moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut step = Step::FIRST;
            for forward in moves {
                step = if forward { step.next(total) } else { step.previous() };
                prop_assert!(step.value() >= 1 && step.value() <= total);
            }
        }
    }
}
