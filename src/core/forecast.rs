//! Forecast result structure for holding predictions.

/// A forecast result: point predictions in step order.
///
/// Replay forecasts also record, for every step, the history index the
/// prediction was read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    point: Vec<f64>,
    origins: Option<Vec<usize>>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty forecast with room for `horizon` steps.
    pub fn with_capacity(horizon: usize) -> Self {
        Self {
            point: Vec::with_capacity(horizon),
            origins: None,
        }
    }

    /// Append the next step, read from history position `origin`.
    pub fn push_replayed(&mut self, value: f64, origin: usize) {
        self.point.push(value);
        self.origins
            .get_or_insert_with(|| Vec::with_capacity(self.point.capacity()))
            .push(origin);
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Point predictions.
    pub fn values(&self) -> &[f64] {
        &self.point
    }

    /// History positions each prediction was read from, if recorded.
    pub fn origins(&self) -> Option<&[usize]> {
        self.origins.as_deref()
    }

    /// Consume the forecast, returning the point predictions.
    pub fn into_values(self) -> Vec<f64> {
        self.point
    }
}
