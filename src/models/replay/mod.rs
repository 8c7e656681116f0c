//! Periodic analog-replay forecasting.
//!
//! Predicts the next value by finding the historical observation most similar
//! to a reference point, restricted to positions a whole number of periods
//! back from the end of history, and replaying whatever followed it.

mod forecaster;
mod matcher;

pub use forecaster::{ReplayForecaster, ReplayMode};
pub use matcher::{AnalogMatch, PeriodicAnalogMatcher};
