//! Single-regressor least squares.

use super::Regressor;
use crate::error::{ForecastError, Result};

/// Ordinary least squares fit of `y = intercept + slope * x`.
///
/// A constant regressor carries no information; the fit then falls back to
/// the mean of `y` with a zero slope.
#[derive(Debug, Clone, Default)]
pub struct SimpleLinearRegression {
    coefficients: Option<(f64, f64)>,
}

impl SimpleLinearRegression {
    /// Create an unfitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fitted intercept.
    pub fn intercept(&self) -> Option<f64> {
        self.coefficients.map(|(intercept, _)| intercept)
    }

    /// Get the fitted slope.
    pub fn slope(&self) -> Option<f64> {
        self.coefficients.map(|(_, slope)| slope)
    }
}

impl Regressor for SimpleLinearRegression {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        if x.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - x_mean;
            sxx += dx * dx;
            sxy += dx * (yi - y_mean);
        }

        let slope = if sxx > f64::EPSILON { sxy / sxx } else { 0.0 };
        let intercept = y_mean - slope * x_mean;
        self.coefficients = Some((intercept, slope));
        Ok(())
    }

    fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let (intercept, slope) = self.coefficients.ok_or(ForecastError::FitRequired)?;
        Ok(x.iter().map(|&xi| intercept + slope * xi).collect())
    }

    fn name(&self) -> &str {
        "LinearRegression"
    }
}
