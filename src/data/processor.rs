//! Data Processor Module
//! Selects subpopulations of the dataset for the comparisons.

use super::record::{Gender, SickLeaveRecord};

/// Age side of a cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCut {
    /// age > cutoff
    Above(u32),
    /// age <= cutoff
    AtOrBelow(u32),
}

impl AgeCut {
    pub fn matches(&self, age: u32) -> bool {
        match *self {
            AgeCut::Above(cutoff) => age > cutoff,
            AgeCut::AtOrBelow(cutoff) => age <= cutoff,
        }
    }
}

/// Predicate selecting one subpopulation.
///
/// A record matches when `sick_days > min_sick_days` and every optional
/// predicate that is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFilter {
    pub min_sick_days: u32,
    pub gender: Option<Gender>,
    pub age: Option<AgeCut>,
}

impl RecordFilter {
    pub fn new(min_sick_days: u32) -> Self {
        Self {
            min_sick_days,
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_age(mut self, age: AgeCut) -> Self {
        self.age = Some(age);
        self
    }

    pub fn matches(&self, record: &SickLeaveRecord) -> bool {
        record.sick_days > self.min_sick_days && self.matches_population(record)
    }

    /// Matches the group regardless of sick days.
    pub fn matches_population(&self, record: &SickLeaveRecord) -> bool {
        self.gender.map_or(true, |g| record.gender == g)
            && self.age.map_or(true, |cut| cut.matches(record.age))
    }
}

/// Handles record selection and projection.
pub struct DataProcessor;

impl DataProcessor {
    /// Records matching `filter`, in input order.
    pub fn filter(records: &[SickLeaveRecord], filter: &RecordFilter) -> Vec<SickLeaveRecord> {
        records
            .iter()
            .filter(|record| filter.matches(record))
            .copied()
            .collect()
    }

    /// Size of the group `filter` describes, ignoring the sick-days threshold.
    pub fn population_count(records: &[SickLeaveRecord], filter: &RecordFilter) -> usize {
        records
            .iter()
            .filter(|record| filter.matches_population(record))
            .count()
    }

    /// Sick-days values as samples for the statistics.
    pub fn sick_days(records: &[SickLeaveRecord]) -> Vec<f64> {
        records.iter().map(|r| f64::from(r.sick_days)).collect()
    }
}
