//! # replay-forecast
//!
//! One-shot predictors for a genetic-algorithm search over event data.
//!
//! The centerpiece is the periodic analog-replay forecaster: it finds the
//! historical observation most similar to the latest one, among positions a
//! whole number of periods back, and replays what came after it. Four replay
//! modes cover re-matching with and without an exogenous signal, re-matching
//! on a history that grows with each prediction, and a single match followed
//! by a straight readout. A least-squares regression predictor sits alongside
//! behind the same [`models::Predictor`] interface.

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, Observation, ReferencePoint, Sequence, Shape};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::replay::{PeriodicAnalogMatcher, ReplayForecaster, ReplayMode};
    pub use crate::models::{PredictionMethod, Predictor};
    pub use crate::utils::{format_series, parse_series};
}
