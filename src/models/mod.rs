//! Prediction strategies.

mod traits;

pub mod regression;
pub mod replay;

pub use regression::{RegressionPredictor, Regressor, SimpleLinearRegression};
pub use replay::{PeriodicAnalogMatcher, ReplayForecaster, ReplayMode};
pub use traits::{BoxedPredictor, PredictionMethod, Predictor};
