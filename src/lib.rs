//! Sick-Leave Explorer
//!
//! Loads sick-leave CSV exports, splits them by gender and by an age cutoff,
//! and compares the groups with histograms and two-sample t-tests.

pub mod analysis;
pub mod config;
pub mod data;
pub mod logging;
pub mod stats;
