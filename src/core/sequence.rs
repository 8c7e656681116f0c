//! Sequence data structure holding the training observations.

use crate::error::{ForecastError, Result};
use std::fmt;

/// Whether a sequence (or reference point) carries an exogenous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Values only.
    Univariate,
    /// Values paired with an exogenous signal.
    Bivariate,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Univariate => write!(f, "univariate"),
            Shape::Bivariate => write!(f, "bivariate"),
        }
    }
}

/// A single observation, read out of a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Position in arrival order.
    pub index: usize,
    pub value: f64,
    pub exo: Option<f64>,
}

/// The point a match is sought against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub value: f64,
    pub exo: Option<f64>,
}

impl ReferencePoint {
    /// Reference without an exogenous value.
    pub fn univariate(value: f64) -> Self {
        Self { value, exo: None }
    }

    /// Reference pairing a value with an exogenous value.
    pub fn bivariate(value: f64, exo: f64) -> Self {
        Self {
            value,
            exo: Some(exo),
        }
    }

    /// Get the shape of the reference.
    pub fn shape(&self) -> Shape {
        if self.exo.is_some() {
            Shape::Bivariate
        } else {
            Shape::Univariate
        }
    }

    /// Distance to an observation of the same shape.
    ///
    /// Absolute difference for univariate points, Euclidean distance over
    /// `(value, exo)` for bivariate ones.
    pub fn distance_to(&self, observation: &Observation) -> Result<f64> {
        match (self.exo, observation.exo) {
            (None, None) => Ok((observation.value - self.value).abs()),
            (Some(exo), Some(other_exo)) => {
                Ok((observation.value - self.value).hypot(other_exo - exo))
            }
            (Some(_), None) => Err(ForecastError::ShapeMismatch {
                expected: Shape::Univariate,
                got: Shape::Bivariate,
            }),
            (None, Some(_)) => Err(ForecastError::ShapeMismatch {
                expected: Shape::Bivariate,
                got: Shape::Univariate,
            }),
        }
    }
}

/// Ordered, append-only container of observations.
///
/// Values are stored column-wise; the exo column is either present for
/// every observation or absent for all of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    values: Vec<f64>,
    exo: Option<Vec<f64>>,
}

impl Sequence {
    /// Create a sequence without an exogenous signal.
    pub fn univariate(values: Vec<f64>) -> Result<Self> {
        check_finite(&values)?;
        Ok(Self { values, exo: None })
    }

    /// Create a sequence pairing each value with an exogenous value.
    pub fn bivariate(values: Vec<f64>, exo: Vec<f64>) -> Result<Self> {
        if values.len() != exo.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: values.len(),
                got: exo.len(),
            });
        }
        check_finite(&values)?;
        check_finite(&exo)?;
        Ok(Self {
            values,
            exo: Some(exo),
        })
    }

    /// Get the shape of the sequence.
    pub fn shape(&self) -> Shape {
        if self.exo.is_some() {
            Shape::Bivariate
        } else {
            Shape::Univariate
        }
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read the observation at `index`.
    pub fn get(&self, index: usize) -> Option<Observation> {
        let value = *self.values.get(index)?;
        let exo = match &self.exo {
            Some(exo) => Some(*exo.get(index)?),
            None => None,
        };
        Some(Observation { index, value, exo })
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<Observation> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Value column.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Exo column, if present.
    pub fn exo(&self) -> Option<&[f64]> {
        self.exo.as_deref()
    }

    /// Append one observation.
    ///
    /// The exo presence must match the sequence shape.
    pub fn push(&mut self, value: f64, exo: Option<f64>) -> Result<()> {
        if !value.is_finite() || exo.is_some_and(|e| !e.is_finite()) {
            return Err(ForecastError::MissingValues);
        }
        match (&mut self.exo, exo) {
            (None, None) => {}
            (Some(column), Some(e)) => column.push(e),
            (Some(_), None) => {
                return Err(ForecastError::ShapeMismatch {
                    expected: Shape::Bivariate,
                    got: Shape::Univariate,
                })
            }
            (None, Some(_)) => {
                return Err(ForecastError::ShapeMismatch {
                    expected: Shape::Univariate,
                    got: Shape::Bivariate,
                })
            }
        }
        self.values.push(value);
        Ok(())
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::MissingValues);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn univariate_sequence_reads_back_in_order() {
        let seq = Sequence::univariate(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.shape(), Shape::Univariate);
        assert_eq!(
            seq.get(1),
            Some(Observation {
                index: 1,
                value: 2.0,
                exo: None
            })
        );
        assert_eq!(seq.last().unwrap().value, 3.0);
        assert!(seq.get(3).is_none());
    }

    #[test]
    fn bivariate_sequence_requires_equal_columns() {
        let err = Sequence::bivariate(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            ForecastError::DimensionMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            Sequence::univariate(vec![1.0, f64::NAN]),
            Err(ForecastError::MissingValues)
        );
        assert_eq!(
            Sequence::bivariate(vec![1.0], vec![f64::INFINITY]),
            Err(ForecastError::MissingValues)
        );

        let mut seq = Sequence::univariate(vec![1.0]).unwrap();
        assert_eq!(seq.push(f64::NAN, None), Err(ForecastError::MissingValues));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn push_keeps_exo_presence_uniform() {
        let mut seq = Sequence::bivariate(vec![1.0], vec![10.0]).unwrap();
        seq.push(2.0, Some(20.0)).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.exo(), Some(&[10.0, 20.0][..]));

        let err = seq.push(3.0, None).unwrap_err();
        assert!(matches!(err, ForecastError::ShapeMismatch { .. }));
        assert_eq!(seq.len(), 2);

        let mut uni = Sequence::univariate(vec![1.0]).unwrap();
        assert!(uni.push(2.0, Some(1.0)).is_err());
        uni.push(2.0, None).unwrap();
        assert_eq!(uni.values(), &[1.0, 2.0]);
    }

    #[test]
    fn reference_distances() {
        let obs = Observation {
            index: 0,
            value: 4.0,
            exo: None,
        };
        let d = ReferencePoint::univariate(1.5).distance_to(&obs).unwrap();
        assert_relative_eq!(d, 2.5, epsilon = 1e-12);

        let obs = Observation {
            index: 0,
            value: 4.0,
            exo: Some(5.0),
        };
        let d = ReferencePoint::bivariate(1.0, 1.0).distance_to(&obs).unwrap();
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);

        assert!(ReferencePoint::univariate(1.0).distance_to(&obs).is_err());
    }
}
