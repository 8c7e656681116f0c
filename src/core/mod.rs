//! Core data structures shared by the predictors.

mod forecast;
mod sequence;

pub use forecast::Forecast;
pub use sequence::{Observation, ReferencePoint, Sequence, Shape};
