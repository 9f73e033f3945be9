//! Statistics Calculator Module
//! Descriptive statistics and count comparisons for one subpopulation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Insufficient data: need at least {needed} observations, found {found}")]
    InsufficientData { needed: usize, found: usize },
    #[error("Invalid t distribution with {degrees_of_freedom} degrees of freedom")]
    InvalidDistribution { degrees_of_freedom: f64 },
}

/// Statistics for a single group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation; `None` for a single observation.
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(values: &[f64]) -> Result<GroupStats, StatsError> {
        let n = values.len();
        if n == 0 {
            return Err(StatsError::InsufficientData {
                needed: 1,
                found: 0,
            });
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = mean(values);
        let std = sample_variance(values).map(f64::sqrt);

        Ok(GroupStats {
            count: n,
            mean,
            median: if n % 2 == 0 {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
            } else {
                sorted[n / 2]
            },
            std,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }

    /// How much larger `count` is than `baseline`, in percent of `baseline`.
    ///
    /// The baseline is the other group's count, so small groups give large
    /// ratios. Either group being empty is reported as insufficient data.
    pub fn percent_difference(count: usize, baseline: usize) -> Result<f64, StatsError> {
        if count == 0 || baseline == 0 {
            return Err(StatsError::InsufficientData {
                needed: 1,
                found: 0,
            });
        }
        Ok((count as f64 - baseline as f64) * 100.0 / baseline as f64)
    }

    /// Fraction of a population selected by a filter, `None` for an empty population.
    pub fn share(count: usize, population: usize) -> Option<f64> {
        (population > 0).then(|| count as f64 / population as f64)
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance, `None` below two observations.
pub(crate) fn sample_variance(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = mean(values);
    Some(values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptive_stats() {
        let stats = StatsCalculator::compute_descriptive_stats(&[3.0, 7.0, 4.0, 6.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.min, 3.0);
        assert_eq!(stats.max, 7.0);
        let std = stats.std.unwrap();
        assert!((std - (10.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let stats = StatsCalculator::compute_descriptive_stats(&[4.0]).unwrap();
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.std, None);
    }

    #[test]
    fn test_empty_values_are_insufficient() {
        assert_eq!(
            StatsCalculator::compute_descriptive_stats(&[]),
            Err(StatsError::InsufficientData {
                needed: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_percent_difference() {
        assert_eq!(StatsCalculator::percent_difference(15, 10), Ok(50.0));
        assert_eq!(StatsCalculator::percent_difference(5, 10), Ok(-50.0));
    }

    #[test]
    fn test_percent_difference_with_an_empty_group() {
        assert!(matches!(
            StatsCalculator::percent_difference(4, 0),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            StatsCalculator::percent_difference(0, 4),
            Err(StatsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_share() {
        assert_eq!(StatsCalculator::share(1, 4), Some(0.25));
        assert_eq!(StatsCalculator::share(0, 0), None);
    }
}
