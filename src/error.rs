//! Error types for the replay-forecast library.

use crate::core::Shape;
use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while matching or forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// History too short for any period-aligned candidate to exist.
    #[error("insufficient history: period {period} needs at least {needed} observations, got {got}")]
    InsufficientHistory {
        period: usize,
        needed: usize,
        got: usize,
    },

    /// Reference point and history disagree on whether exo values are present.
    #[error("shape mismatch: expected {expected} data, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Non-finite values detected when not allowed.
    #[error("missing values detected in data")]
    MissingValues,

    /// Sequential readout would read past the end of history.
    #[error("readout exhausted: need index {needed}, history ends at {available}")]
    ReadoutExhausted { needed: usize, available: usize },

    /// A comma-separated token could not be parsed as a number.
    #[error("cannot parse token {position} ('{token}') as a number")]
    ParseError { position: usize, token: String },
}
