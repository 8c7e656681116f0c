//! Predictor trait and the factory for every built-in strategy.

use crate::error::{ForecastError, Result};
use crate::models::regression::{RegressionPredictor, SimpleLinearRegression};
use crate::models::replay::{ReplayForecaster, ReplayMode};
use std::fmt;
use std::str::FromStr;

/// Common interface for all prediction strategies.
///
/// Mirrors a one-shot predictor invocation: training exo values, training
/// targets and test exo values in, one prediction per test value out.
///
/// This trait is object-safe and can be used with `Box<dyn Predictor>`.
pub trait Predictor {
    /// Predict `x_test.len()` values.
    fn predict(&self, x_train: &[f64], y_train: &[f64], x_test: &[f64]) -> Result<Vec<f64>>;

    /// Get the strategy name.
    fn name(&self) -> &str;
}

/// Type alias for boxed predictor trait objects.
///
/// # Example
///
/// ```
/// use replay_forecast::models::{BoxedPredictor, PredictionMethod};
///
/// let model: BoxedPredictor = PredictionMethod::SequentialReadout.create();
/// assert_eq!(model.name(), "sequential-readout");
/// ```
pub type BoxedPredictor = Box<dyn Predictor>;

/// Every built-in prediction strategy, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionMethod {
    LinearRegression,
    SequentialRepeat,
    SequentialRepeatNoExo,
    SequentialRepeatUpdate,
    SequentialReadout,
}

impl PredictionMethod {
    pub const ALL: [PredictionMethod; 5] = [
        PredictionMethod::LinearRegression,
        PredictionMethod::SequentialRepeat,
        PredictionMethod::SequentialRepeatNoExo,
        PredictionMethod::SequentialRepeatUpdate,
        PredictionMethod::SequentialReadout,
    ];

    /// The replay mode behind this method, if it is a replay method.
    pub fn replay_mode(&self) -> Option<ReplayMode> {
        match self {
            PredictionMethod::LinearRegression => None,
            PredictionMethod::SequentialRepeat => Some(ReplayMode::SequentialRepeat),
            PredictionMethod::SequentialRepeatNoExo => Some(ReplayMode::SequentialRepeatNoExo),
            PredictionMethod::SequentialRepeatUpdate => Some(ReplayMode::SequentialRepeatUpdate),
            PredictionMethod::SequentialReadout => Some(ReplayMode::SequentialReadout),
        }
    }

    /// Kebab-case name used to select this method.
    pub fn name(&self) -> &'static str {
        match self.replay_mode() {
            Some(mode) => mode.name(),
            None => "linear-regression",
        }
    }

    /// Create a new predictor with default settings.
    pub fn create(&self) -> BoxedPredictor {
        match self.replay_mode() {
            Some(mode) => Box::new(ReplayForecaster::new(mode)),
            None => Box::new(RegressionPredictor::new(SimpleLinearRegression::new())),
        }
    }

    /// Create a new predictor, overriding the replay period.
    pub fn create_with_period(&self, period: usize) -> Result<BoxedPredictor> {
        match self.replay_mode() {
            Some(mode) => Ok(Box::new(ReplayForecaster::with_period(mode, period)?)),
            None => Err(ForecastError::InvalidParameter(format!(
                "'{}' does not take a period",
                self.name()
            ))),
        }
    }
}

impl fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredictionMethod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PredictionMethod::ALL
            .into_iter()
            .find(|method| method.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = PredictionMethod::ALL.iter().map(|m| m.name()).collect();
                ForecastError::InvalidParameter(format!(
                    "unknown prediction method '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_round_trips_through_its_name() {
        for method in PredictionMethod::ALL {
            assert_eq!(method.name().parse::<PredictionMethod>().unwrap(), method);
            assert_eq!(method.create().name(), method.name());
        }
    }

    #[test]
    fn method_names_are_forgiving() {
        assert_eq!(
            "SEQUENTIAL_READOUT".parse::<PredictionMethod>().unwrap(),
            PredictionMethod::SequentialReadout
        );
        assert_eq!(
            " linear-regression ".parse::<PredictionMethod>().unwrap(),
            PredictionMethod::LinearRegression
        );
    }

    #[test]
    fn unknown_method_lists_alternatives() {
        let err = "elastic-net".parse::<PredictionMethod>().unwrap_err();
        match err {
            ForecastError::InvalidParameter(msg) => {
                assert!(msg.contains("elastic-net"));
                assert!(msg.contains("sequential-repeat-update"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn period_override_only_applies_to_replay() {
        assert!(PredictionMethod::SequentialRepeat.create_with_period(3).is_ok());
        assert!(PredictionMethod::SequentialRepeat.create_with_period(0).is_err());
        assert!(PredictionMethod::LinearRegression
            .create_with_period(7)
            .is_err());
    }

    #[test]
    fn boxed_predictors_share_one_interface() {
        let x_train = vec![1.0; 30];
        let y_train: Vec<f64> = (0..30).map(|i| (i % 7) as f64).collect();
        let x_test = vec![1.0; 2];

        for method in PredictionMethod::ALL {
            let model = method.create();
            let preds = model.predict(&x_train, &y_train, &x_test).unwrap();
            assert_eq!(preds.len(), 2, "{method}");
        }
    }
}
