//! Independent two-sample t-test.

use super::calculator::{mean, sample_variance, StatsError};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Variance assumption of the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variance {
    /// Student's t-test with a pooled variance estimate.
    #[default]
    Pooled,
    /// Welch's t-test (unequal variances).
    Welch,
}

/// Result of a two-sample t-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTest {
    pub t_statistic: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

/// Outcome of comparing a p-value with the significance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Means differ significantly.
    RejectNull,
    RetainNull,
}

impl Decision {
    pub fn classify(p_value: f64, alpha: f64) -> Self {
        if p_value < alpha {
            Decision::RejectNull
        } else {
            Decision::RetainNull
        }
    }

    pub fn is_significant(&self) -> bool {
        matches!(self, Decision::RejectNull)
    }
}

impl TTest {
    pub fn decision(&self, alpha: f64) -> Decision {
        Decision::classify(self.p_value, alpha)
    }
}

/// Compare the means of `a` and `b`. The statistic is positive when `a`'s mean is larger.
pub fn two_sample_t_test(a: &[f64], b: &[f64], variance: Variance) -> Result<TTest, StatsError> {
    for sample in [a, b] {
        if sample.len() < 2 {
            return Err(StatsError::InsufficientData {
                needed: 2,
                found: sample.len(),
            });
        }
    }

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let (mean1, mean2) = (mean(a), mean(b));
    let var1 = sample_variance(a).unwrap_or(0.0);
    let var2 = sample_variance(b).unwrap_or(0.0);
    let pooled_df = n1 + n2 - 2.0;

    let (se, df) = match variance {
        Variance::Pooled => {
            let pooled = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / pooled_df;
            ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), pooled_df)
        }
        Variance::Welch => {
            let (s1, s2) = (var1 / n1, var2 / n2);
            // Welch-Satterthwaite degrees of freedom
            let df_denom = s1.powi(2) / (n1 - 1.0) + s2.powi(2) / (n2 - 1.0);
            let df = if df_denom > 0.0 {
                (s1 + s2).powi(2) / df_denom
            } else {
                pooled_df
            };
            ((s1 + s2).sqrt(), df)
        }
    };

    let diff = mean1 - mean2;
    if se == 0.0 {
        // Both samples constant
        let (t_statistic, p_value) = if diff == 0.0 {
            (0.0, 1.0)
        } else {
            (f64::INFINITY.copysign(diff), 0.0)
        };
        return Ok(TTest {
            t_statistic,
            p_value,
            degrees_of_freedom: df,
        });
    }

    let t_statistic = diff / se;
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|_| StatsError::InvalidDistribution {
        degrees_of_freedom: df,
    })?;
    let p_value = (2.0 * dist.sf(t_statistic.abs())).min(1.0);

    Ok(TTest {
        t_statistic,
        p_value,
        degrees_of_freedom: df,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: f64 = 0.05;

    #[test]
    fn test_pooled_known_values() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let result = two_sample_t_test(&a, &b, Variance::Pooled).unwrap();

        assert!((result.t_statistic + 1.0).abs() < 1e-12);
        assert_eq!(result.degrees_of_freedom, 8.0);
        assert!((result.p_value - 0.346593).abs() < 1e-4);
        assert_eq!(result.decision(ALPHA), Decision::RetainNull);
    }

    #[test]
    fn test_welch_matches_pooled_for_equal_variances_and_sizes() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let pooled = two_sample_t_test(&a, &b, Variance::Pooled).unwrap();
        let welch = two_sample_t_test(&a, &b, Variance::Welch).unwrap();

        assert!((pooled.t_statistic - welch.t_statistic).abs() < 1e-12);
        assert!((welch.degrees_of_freedom - 8.0).abs() < 1e-9);
        assert!((pooled.p_value - welch.p_value).abs() < 1e-9);
    }

    #[test]
    fn test_separated_groups_reject_null() {
        let a = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
        let b = [8.0, 9.0, 8.0, 9.0, 8.0, 9.0];
        let result = two_sample_t_test(&a, &b, Variance::Pooled).unwrap();

        assert!(result.t_statistic < 0.0);
        assert!(result.p_value < 1e-6);
        assert!(result.decision(ALPHA).is_significant());
    }

    #[test]
    fn test_identical_samples_retain_null() {
        let a = [3.0, 4.0, 5.0, 6.0];
        let result = two_sample_t_test(&a, &a, Variance::Pooled).unwrap();
        assert_eq!(result.t_statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
        assert_eq!(result.decision(ALPHA), Decision::RetainNull);
    }

    #[test]
    fn test_constant_samples() {
        let same = two_sample_t_test(&[4.0, 4.0], &[4.0, 4.0, 4.0], Variance::Pooled).unwrap();
        assert_eq!((same.t_statistic, same.p_value), (0.0, 1.0));

        let apart = two_sample_t_test(&[3.0, 3.0], &[5.0, 5.0], Variance::Welch).unwrap();
        assert_eq!(apart.t_statistic, f64::NEG_INFINITY);
        assert_eq!(apart.p_value, 0.0);
    }

    #[test]
    fn test_fewer_than_two_observations() {
        assert_eq!(
            two_sample_t_test(&[3.0], &[4.0, 5.0], Variance::Pooled),
            Err(StatsError::InsufficientData {
                needed: 2,
                found: 1
            })
        );
        assert!(two_sample_t_test(&[3.0, 4.0], &[], Variance::Welch).is_err());
    }

    #[test]
    fn test_classify_is_strict_at_alpha() {
        assert_eq!(Decision::classify(0.05, ALPHA), Decision::RetainNull);
        assert_eq!(Decision::classify(0.049, ALPHA), Decision::RejectNull);
    }
}
