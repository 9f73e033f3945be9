//! Dashboard Configuration Module
//! Fixed analysis constants shared by the report and the GUI.

use crate::stats::Variance;
use std::ops::RangeInclusive;

/// Header of the single combined column the source files carry.
pub const COMBINED_COLUMN: &str = "Количество больничных дней,\"Возраст\",\"Пол\"";

/// Names of the integer fields packed into [`COMBINED_COLUMN`].
pub const SICK_DAYS_COLUMN: &str = "Количество больничных дней";
pub const AGE_COLUMN: &str = "Возраст";

/// Significance threshold for t-test
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Analysis settings. There is no file or flag to override them.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub significance_level: f64,
    pub variance: Variance,
    pub days_range: RangeInclusive<u32>,
    pub default_min_days: u32,
    pub default_age_cutoff: u32,
    /// Extra room above the tallest histogram bar.
    pub histogram_headroom: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            significance_level: SIGNIFICANCE_LEVEL,
            variance: Variance::Pooled,
            days_range: 0..=7,
            default_min_days: 2,
            default_age_cutoff: 35,
            histogram_headroom: 5,
        }
    }
}
