//! Period-aligned nearest-neighbor search over a sequence.

use crate::core::{Observation, ReferencePoint, Sequence};
use crate::error::{ForecastError, Result};
use tracing::trace;

/// Outcome of an analog search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogMatch {
    /// Forward index of the matched candidate. Always `<= len - 2`.
    pub index: usize,
    /// Distance between the candidate and the reference.
    pub distance: f64,
}

impl AnalogMatch {
    /// Index of the observation that followed the match.
    pub fn successor(&self) -> usize {
        self.index + 1
    }
}

/// Finds the historical observation closest to a reference point, among
/// candidates lying a whole number of periods back from the end of history.
///
/// The most recent observation is never a candidate since nothing follows it.
/// Counting backward from it, the observation `s` steps back is a candidate
/// when `s` is a nonzero multiple of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicAnalogMatcher {
    period: usize,
}

impl PeriodicAnalogMatcher {
    /// Create a matcher with the given period.
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "period must be positive".to_string(),
            ));
        }
        Ok(Self { period })
    }

    /// Get the period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Search `history` for the best analog of `reference`.
    ///
    /// Ties keep the candidate nearest the end of history.
    pub fn find_match(&self, reference: &ReferencePoint, history: &Sequence) -> Result<AnalogMatch> {
        if reference.shape() != history.shape() {
            return Err(ForecastError::ShapeMismatch {
                expected: history.shape(),
                got: reference.shape(),
            });
        }
        let last_index = history
            .len()
            .checked_sub(1)
            .ok_or_else(|| self.insufficient(0))?;

        let values = history.values();
        let exo = history.exo();
        let mut best: Option<AnalogMatch> = None;

        for step_counter in (self.period..=last_index).step_by(self.period) {
            let candidate_index = last_index - step_counter;
            let candidate = Observation {
                index: candidate_index,
                value: values[candidate_index],
                exo: exo.map(|column| column[candidate_index]),
            };
            let distance = reference.distance_to(&candidate)?;
            trace!(candidate_index, distance, "analog candidate");

            // strict less-than: an equal distance further back never wins
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(AnalogMatch {
                    index: candidate_index,
                    distance,
                });
            }
        }

        let found = best.ok_or_else(|| self.insufficient(history.len()))?;
        debug_assert!(found.index < last_index);
        debug_assert_eq!((last_index - found.index) % self.period, 0);
        Ok(found)
    }

    /// Error for a history of `got` observations that holds no candidate.
    pub(crate) fn insufficient(&self, got: usize) -> ForecastError {
        ForecastError::InsufficientHistory {
            period: self.period,
            needed: self.period + 1,
            got,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;
    use approx::assert_relative_eq;

    fn ramp() -> Sequence {
        Sequence::univariate((1..=15).map(|i| (i * 10) as f64).collect()).unwrap()
    }

    #[test]
    fn picks_period_aligned_candidate_closest_to_reference() {
        // last index 14: candidates at 7 (80.0) and 0 (10.0)
        let matcher = PeriodicAnalogMatcher::new(7).unwrap();
        let found = matcher
            .find_match(&ReferencePoint::univariate(150.0), &ramp())
            .unwrap();
        assert_eq!(found.index, 7);
        assert_relative_eq!(found.distance, 70.0, epsilon = 1e-12);
        assert_eq!(found.successor(), 8);

        let found = matcher
            .find_match(&ReferencePoint::univariate(0.0), &ramp())
            .unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn ties_prefer_candidate_nearest_the_end() {
        // candidates at 4 and 1, both at distance 1 from 5.0
        let history = Sequence::univariate(vec![0.0, 4.0, 0.0, 0.0, 6.0, 0.0, 0.0, 9.0]).unwrap();
        let matcher = PeriodicAnalogMatcher::new(3).unwrap();
        let found = matcher
            .find_match(&ReferencePoint::univariate(5.0), &history)
            .unwrap();
        assert_eq!(found.index, 4);
    }

    #[test]
    fn exact_period_plus_one_has_single_candidate() {
        let history = Sequence::univariate(vec![3.0, 1.0, 2.0, 5.0]).unwrap();
        let matcher = PeriodicAnalogMatcher::new(3).unwrap();
        let found = matcher
            .find_match(&ReferencePoint::univariate(100.0), &history)
            .unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn short_history_is_insufficient() {
        let history = Sequence::univariate(vec![1.0; 7]).unwrap();
        let matcher = PeriodicAnalogMatcher::new(7).unwrap();
        let err = matcher
            .find_match(&ReferencePoint::univariate(1.0), &history)
            .unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientHistory {
                period: 7,
                needed: 8,
                got: 7
            }
        );
    }

    #[test]
    fn empty_history_is_insufficient_and_zero_period_rejected() {
        let matcher = PeriodicAnalogMatcher::new(7).unwrap();
        let empty = Sequence::univariate(vec![]).unwrap();
        assert_eq!(
            matcher.find_match(&ReferencePoint::univariate(1.0), &empty),
            Err(ForecastError::InsufficientHistory {
                period: 7,
                needed: 8,
                got: 0
            })
        );
        let empty = Sequence::bivariate(vec![], vec![]).unwrap();
        assert!(matches!(
            matcher.find_match(&ReferencePoint::bivariate(1.0, 1.0), &empty),
            Err(ForecastError::InsufficientHistory { got: 0, .. })
        ));
        assert!(matches!(
            PeriodicAnalogMatcher::new(0),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn reference_shape_must_match_history() {
        let matcher = PeriodicAnalogMatcher::new(7).unwrap();
        let err = matcher
            .find_match(&ReferencePoint::bivariate(1.0, 2.0), &ramp())
            .unwrap_err();
        assert_eq!(
            err,
            ForecastError::ShapeMismatch {
                expected: Shape::Univariate,
                got: Shape::Bivariate
            }
        );
    }

    #[test]
    fn bivariate_match_uses_euclidean_distance() {
        // values alone would favour index 7; the exo column flips it to 0
        let values: Vec<f64> = (0..15).map(|i| i as f64).collect();
        let mut exo = vec![0.0; 15];
        exo[7] = 100.0;
        let history = Sequence::bivariate(values, exo).unwrap();

        let matcher = PeriodicAnalogMatcher::new(7).unwrap();
        let found = matcher
            .find_match(&ReferencePoint::bivariate(14.0, 0.0), &history)
            .unwrap();
        assert_eq!(found.index, 0);
        assert_relative_eq!(found.distance, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn distant_first_candidate_is_still_eligible() {
        let history = Sequence::univariate(vec![5.0e12, 0.0]).unwrap();
        let matcher = PeriodicAnalogMatcher::new(1).unwrap();
        let found = matcher
            .find_match(&ReferencePoint::univariate(0.0), &history)
            .unwrap();
        assert_eq!(found.index, 0);
    }
}
