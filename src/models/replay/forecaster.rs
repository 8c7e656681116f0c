//! Multi-step analog replay forecasting.

use super::matcher::{AnalogMatch, PeriodicAnalogMatcher};
use crate::core::{Forecast, ReferencePoint, Sequence, Shape};
use crate::error::{ForecastError, Result};
use crate::models::Predictor;
use std::fmt;
use tracing::debug;

/// How a [`ReplayForecaster`] walks from one prediction to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplayMode {
    /// Bivariate; re-match every step against `(previous prediction, test exo)`.
    SequentialRepeat,
    /// Univariate; re-match every step against the previous prediction.
    SequentialRepeatNoExo,
    /// Bivariate; like `SequentialRepeat`, but each prediction is appended
    /// to the history before the next match.
    SequentialRepeatUpdate,
    /// Univariate; match once, then read the history forward from there.
    SequentialReadout,
}

impl ReplayMode {
    pub const ALL: [ReplayMode; 4] = [
        ReplayMode::SequentialRepeat,
        ReplayMode::SequentialRepeatNoExo,
        ReplayMode::SequentialRepeatUpdate,
        ReplayMode::SequentialReadout,
    ];

    /// Weekly stride for the re-matching modes, four weeks for readout.
    pub fn default_period(self) -> usize {
        match self {
            ReplayMode::SequentialReadout => 28,
            _ => 7,
        }
    }

    /// Shape of the history this mode works on.
    pub fn shape(self) -> Shape {
        match self {
            ReplayMode::SequentialRepeat | ReplayMode::SequentialRepeatUpdate => Shape::Bivariate,
            ReplayMode::SequentialRepeatNoExo | ReplayMode::SequentialReadout => Shape::Univariate,
        }
    }

    /// Kebab-case name used to select this mode.
    pub fn name(self) -> &'static str {
        match self {
            ReplayMode::SequentialRepeat => "sequential-repeat",
            ReplayMode::SequentialRepeatNoExo => "sequential-repeat-no-exo",
            ReplayMode::SequentialRepeatUpdate => "sequential-repeat-update",
            ReplayMode::SequentialReadout => "sequential-readout",
        }
    }

    /// Number of test exo values a forecast of `horizon` steps consumes.
    fn exo_needed(self, horizon: usize) -> usize {
        match self {
            ReplayMode::SequentialRepeat => horizon.saturating_sub(1),
            ReplayMode::SequentialRepeatUpdate => horizon,
            ReplayMode::SequentialRepeatNoExo | ReplayMode::SequentialReadout => 0,
        }
    }
}

impl fmt::Display for ReplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Analog replay forecaster.
///
/// The first prediction always comes from matching the last training
/// observation and reading the observation after the match. Later steps
/// depend on the [`ReplayMode`].
///
/// # Example
///
/// ```
/// use replay_forecast::core::Sequence;
/// use replay_forecast::models::replay::{ReplayForecaster, ReplayMode};
///
/// let history = Sequence::univariate((1..=15).map(|i| (i * 10) as f64).collect()).unwrap();
/// let model = ReplayForecaster::new(ReplayMode::SequentialRepeatNoExo);
/// let forecast = model.forecast(history, None, 3).unwrap();
/// assert_eq!(forecast.values(), &[90.0, 90.0, 90.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayForecaster {
    mode: ReplayMode,
    period: usize,
}

impl ReplayForecaster {
    /// Create a forecaster using the mode's default period.
    pub fn new(mode: ReplayMode) -> Self {
        Self {
            mode,
            period: mode.default_period(),
        }
    }

    /// Create a forecaster with a custom period.
    pub fn with_period(mode: ReplayMode, period: usize) -> Result<Self> {
        let matcher = PeriodicAnalogMatcher::new(period)?;
        Ok(Self {
            mode,
            period: matcher.period(),
        })
    }

    /// Get the replay mode.
    pub fn mode(&self) -> ReplayMode {
        self.mode
    }

    /// Get the matching period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Forecast `horizon` steps from an owned history.
    pub fn forecast(
        &self,
        mut history: Sequence,
        test_exo: Option<&[f64]>,
        horizon: usize,
    ) -> Result<Forecast> {
        self.forecast_in_place(&mut history, test_exo, horizon)
    }

    /// Forecast `horizon` steps, growing `history` in place when the mode
    /// appends its predictions.
    ///
    /// All inputs are validated before the first step, so on error no
    /// prediction is produced and `history` is left untouched.
    pub fn forecast_in_place(
        &self,
        history: &mut Sequence,
        test_exo: Option<&[f64]>,
        horizon: usize,
    ) -> Result<Forecast> {
        if horizon == 0 {
            return Ok(Forecast::new());
        }
        if history.shape() != self.mode.shape() {
            return Err(ForecastError::ShapeMismatch {
                expected: self.mode.shape(),
                got: history.shape(),
            });
        }
        let test_exo = self.required_exo(test_exo, horizon)?;
        let matcher = PeriodicAnalogMatcher::new(self.period)?;

        let last = history
            .last()
            .ok_or_else(|| matcher.insufficient(history.len()))?;
        let seed = ReferencePoint {
            value: last.value,
            exo: last.exo,
        };
        let first = matcher.find_match(&seed, history)?;
        debug!(
            mode = %self.mode,
            period = self.period,
            horizon,
            history_len = history.len(),
            matched = first.index,
            "initial analog match"
        );

        match self.mode {
            ReplayMode::SequentialReadout => read_out(history, first, horizon),
            ReplayMode::SequentialRepeatUpdate => {
                repeat_growing(&matcher, history, test_exo, first, horizon)
            }
            ReplayMode::SequentialRepeat | ReplayMode::SequentialRepeatNoExo => {
                repeat(&matcher, history, test_exo, first, horizon)
            }
        }
    }

    /// Slice of test exo values the mode will read, validated up front.
    fn required_exo<'a>(&self, test_exo: Option<&'a [f64]>, horizon: usize) -> Result<&'a [f64]> {
        let needed = self.mode.exo_needed(horizon);
        if self.mode.shape() == Shape::Univariate {
            return Ok(&[]);
        }
        let exo = test_exo.unwrap_or(&[]);
        if exo.len() < needed {
            return Err(ForecastError::DimensionMismatch {
                expected: needed,
                got: exo.len(),
            });
        }
        let exo = &exo[..needed];
        if exo.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }
        Ok(exo)
    }
}

fn value_at(history: &Sequence, index: usize) -> Result<f64> {
    history
        .get(index)
        .map(|obs| obs.value)
        .ok_or(ForecastError::ReadoutExhausted {
            needed: index,
            available: history.len().saturating_sub(1),
        })
}

fn repeat(
    matcher: &PeriodicAnalogMatcher,
    history: &Sequence,
    test_exo: &[f64],
    first: AnalogMatch,
    horizon: usize,
) -> Result<Forecast> {
    let mut forecast = Forecast::with_capacity(horizon);
    let mut current = first;
    let mut previous = value_at(history, current.successor())?;
    forecast.push_replayed(previous, current.successor());

    for step in 1..horizon {
        let reference = match test_exo.get(step - 1) {
            Some(&exo) => ReferencePoint::bivariate(previous, exo),
            None => ReferencePoint::univariate(previous),
        };
        current = matcher.find_match(&reference, history)?;
        previous = value_at(history, current.successor())?;
        debug!(step, matched = current.index, value = previous, "replay step");
        forecast.push_replayed(previous, current.successor());
    }

    Ok(forecast)
}

fn repeat_growing(
    matcher: &PeriodicAnalogMatcher,
    history: &mut Sequence,
    test_exo: &[f64],
    first: AnalogMatch,
    horizon: usize,
) -> Result<Forecast> {
    let mut forecast = Forecast::with_capacity(horizon);
    let mut current = first;

    for (step, &exo) in test_exo.iter().enumerate().take(horizon) {
        let origin = current.successor();
        let value = value_at(history, origin)?;
        forecast.push_replayed(value, origin);
        history.push(value, Some(exo))?;

        if step + 1 < horizon {
            current = matcher.find_match(&ReferencePoint::bivariate(value, exo), history)?;
            debug!(
                step = step + 1,
                matched = current.index,
                history_len = history.len(),
                "replay step on grown history"
            );
        }
    }

    Ok(forecast)
}

fn read_out(history: &Sequence, first: AnalogMatch, horizon: usize) -> Result<Forecast> {
    let start = first.successor();
    let last_index = history.len().saturating_sub(1);
    let end = start
        .checked_add(horizon - 1)
        .ok_or(ForecastError::ReadoutExhausted {
            needed: usize::MAX,
            available: last_index,
        })?;
    if end > last_index {
        return Err(ForecastError::ReadoutExhausted {
            needed: end,
            available: last_index,
        });
    }

    let mut forecast = Forecast::with_capacity(horizon);
    for origin in start..=end {
        forecast.push_replayed(value_at(history, origin)?, origin);
    }
    Ok(forecast)
}

impl Predictor for ReplayForecaster {
    fn predict(&self, x_train: &[f64], y_train: &[f64], x_test: &[f64]) -> Result<Vec<f64>> {
        let history = match self.mode.shape() {
            Shape::Univariate => Sequence::univariate(y_train.to_vec())?,
            Shape::Bivariate => Sequence::bivariate(y_train.to_vec(), x_train.to_vec())?,
        };
        let forecast = self.forecast(history, Some(x_test), x_test.len())?;
        Ok(forecast.into_values())
    }

    fn name(&self) -> &str {
        self.mode.name()
    }
}
