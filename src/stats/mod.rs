//! Stats module - descriptive statistics, histograms and the t-test

mod calculator;
mod histogram;
mod ttest;

pub use calculator::{GroupStats, StatsCalculator, StatsError};
pub use histogram::Histogram;
pub use ttest::{two_sample_t_test, Decision, TTest, Variance};
