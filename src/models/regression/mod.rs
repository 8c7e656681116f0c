//! Regression-based predictors.
//!
//! A regressor maps the exogenous signal to the target directly:
//! fit on `(x_train, y_train)`, predict on `x_test`. Negative predictions are
//! clamped to zero since the targets are event counts.

mod linear;

pub use linear::SimpleLinearRegression;

use crate::error::Result;
use crate::models::Predictor;
use tracing::debug;

/// A one-dimensional regression model.
///
/// ElasticNet, gradient boosting and similar third-party models plug in here.
pub trait Regressor {
    /// Fit the model on paired samples.
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()>;

    /// Predict one value per input.
    fn predict(&self, x: &[f64]) -> Result<Vec<f64>>;

    fn name(&self) -> &str;
}

/// Adapts a [`Regressor`] to the [`Predictor`] contract.
///
/// Each call fits a fresh clone of the template, so the predictor itself
/// stays immutable.
///
/// # Example
///
/// ```
/// use replay_forecast::models::regression::{RegressionPredictor, SimpleLinearRegression};
/// use replay_forecast::models::Predictor;
///
/// let model = RegressionPredictor::new(SimpleLinearRegression::new());
/// let preds = model.predict(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[4.0, -5.0]).unwrap();
/// assert_eq!(preds.len(), 2);
/// assert_eq!(preds[1], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RegressionPredictor<R> {
    template: R,
}

impl<R: Regressor + Clone> RegressionPredictor<R> {
    /// Wrap an unfitted regressor; each call fits a fresh clone of it.
    pub fn new(template: R) -> Self {
        Self { template }
    }
}

impl<R: Regressor + Clone> Predictor for RegressionPredictor<R> {
    fn predict(&self, x_train: &[f64], y_train: &[f64], x_test: &[f64]) -> Result<Vec<f64>> {
        let mut model = self.template.clone();
        model.fit(x_train, y_train)?;
        let raw = model.predict(x_test)?;
        let clamped = raw.iter().filter(|v| **v < 0.0).count();
        debug!(
            model = model.name(),
            samples = x_train.len(),
            horizon = x_test.len(),
            clamped,
            "regression prediction"
        );
        Ok(raw.into_iter().map(|v| v.max(0.0)).collect())
    }

    fn name(&self) -> &str {
        self.template.name()
    }
}
