//! Score and AnswerValue value objects (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest value on the answer scale.
pub const SCALE_MIN: u8 = 1;

/// Highest value on the answer scale.
pub const SCALE_MAX: u8 = 5;

/// A single answer on the 1-5 readiness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    /// Creates an AnswerValue, returning error if outside 1-5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "answer",
                i32::from(SCALE_MIN),
                i32::from(SCALE_MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

/// An averaged score, always within `[1.0, 5.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Creates a Score, clamping to the 1-5 scale. NaN maps to the minimum.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(f64::from(SCALE_MIN));
        }
        Self(value.clamp(f64::from(SCALE_MIN), f64::from(SCALE_MAX)))
    }

    /// Arithmetic mean of the given values, clamped. `None` when empty.
    pub fn mean<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0_f64, 0_u32), |(sum, count), v| (sum + v, count + 1));
        if count == 0 {
            None
        } else {
            Some(Self::new(sum / f64::from(count)))
        }
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to the one decimal place shown on screen.
    pub fn rounded(&self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }

    /// Width of a score indicator bar, as a percentage of the scale maximum.
    pub fn indicator_percent(&self) -> f64 {
        self.0 / f64::from(SCALE_MAX) * 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/5.0", self.rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn answer_value_accepts_scale() {
        for v in 1..=5 {
            assert_eq!(AnswerValue::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn answer_value_rejects_outside_scale() {
        assert!(AnswerValue::try_new(0).is_err());
        assert!(AnswerValue::try_new(6).is_err());
    }

    #[test]
    fn answer_value_deserialization_validates() {
        assert!(serde_json::from_str::<AnswerValue>("3").is_ok());
        assert!(serde_json::from_str::<AnswerValue>("9").is_err());
    }

    #[test]
    fn score_clamps() {
        assert_eq!(Score::new(0.2).value(), 1.0);
        assert_eq!(Score::new(7.0).value(), 5.0);
        assert_eq!(Score::new(f64::NAN).value(), 1.0);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert!(Score::mean(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn mean_averages() {
        let score = Score::mean(vec![2.0, 3.0, 5.0]).unwrap();
        assert!((score.value() - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn displays_one_decimal() {
        assert_eq!(Score::new(3.25).to_string(), "3.2/5.0");
        assert_eq!(Score::new(4.0).to_string(), "4.0/5.0");
    }

    #[test]
    fn indicator_percent_scales_to_five() {
        assert!((Score::new(2.5).indicator_percent() - 50.0).abs() < 1e-9);
        assert!((Score::new(5.0).indicator_percent() - 100.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn mean_of_answers_stays_on_scale(values in proptest::collection::vec(1u8..=5, 1..30)) {
            let score = Score::mean(values.iter().map(|v| f64::from(*v))).unwrap();
            prop_assert!(score.value() >= 1.0 && score.value() <= 5.0);
        }
    }
}
