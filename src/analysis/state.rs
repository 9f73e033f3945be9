//! Dashboard State Module
//! Holds the loaded dataset and the current control values.

use super::report::{render, DashboardReport};
use crate::config::DashboardConfig;
use crate::data::{Dataset, Gender, LoaderError};
use std::ops::RangeInclusive;
use tracing::debug;

/// Values of the interactive controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    /// Sick-days threshold of the gender analysis.
    pub gender_min_days: u32,
    /// Sick-days threshold of the age analysis.
    pub age_min_days: u32,
    pub age_cutoff: u32,
    pub age_gender_filter: Option<Gender>,
    pub show_raw_data: bool,
}

impl Controls {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            gender_min_days: config.default_min_days,
            age_min_days: config.default_min_days,
            age_cutoff: config.default_age_cutoff,
            age_gender_filter: None,
            show_raw_data: false,
        }
    }
}

/// Everything the dashboard needs to draw a frame.
pub struct DashboardState {
    pub config: DashboardConfig,
    pub controls: Controls,
    dataset: Option<Dataset>,
    load_error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            controls: Controls::from_config(&config),
            config,
            dataset: None,
            load_error: None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Replace the dataset with the outcome of a load.
    ///
    /// A failed load drops the previous dataset and keeps the error message.
    pub fn apply_load(&mut self, result: Result<Dataset, LoaderError>) {
        match result {
            Ok(dataset) => {
                self.load_error = None;
                self.dataset = Some(dataset);
                self.controls.age_cutoff = self.clamp_age(self.config.default_age_cutoff);
                debug!(age_cutoff = self.controls.age_cutoff, "dataset replaced");
            }
            Err(e) => {
                self.dataset = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Observed age range, the bounds of the age slider.
    pub fn age_range(&self) -> Option<RangeInclusive<u32>> {
        self.dataset
            .as_ref()
            .and_then(Dataset::age_range)
            .map(|(min, max)| min..=max)
    }

    fn clamp_age(&self, age: u32) -> u32 {
        match self.age_range() {
            Some(range) => age.clamp(*range.start(), *range.end()),
            None => age,
        }
    }

    /// Report for the current state, `None` before a dataset is loaded.
    pub fn report(&self) -> Option<DashboardReport> {
        self.dataset
            .as_ref()
            .map(|dataset| render(dataset, &self.controls, &self.config))
    }
}
