//! Report Module
//! Derives every view of the dashboard from the dataset and the control values.

use super::state::Controls;
use crate::config::DashboardConfig;
use crate::data::{AgeCut, DataProcessor, Dataset, Gender, RecordFilter, SickLeaveRecord};
use crate::stats::{
    two_sample_t_test, Decision, GroupStats, Histogram, StatsCalculator, StatsError, TTest,
};

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub label: String,
    /// Records passing the sick-days threshold.
    pub count: usize,
    /// Records in the group regardless of sick days.
    pub population: usize,
    /// Sick-days sample of the selected records.
    pub values: Vec<f64>,
    pub stats: Result<GroupStats, StatsError>,
    pub histogram: Result<Histogram, StatsError>,
}

impl GroupView {
    fn build(label: String, records: &[SickLeaveRecord], filter: &RecordFilter) -> Self {
        let selected = DataProcessor::filter(records, filter);
        let values = DataProcessor::sick_days(&selected);

        Self {
            label,
            count: selected.len(),
            population: DataProcessor::population_count(records, filter),
            stats: StatsCalculator::compute_descriptive_stats(&values),
            histogram: Histogram::from_values(&values),
            values,
        }
    }

    /// Fraction of the group above the threshold.
    pub fn share(&self) -> Option<f64> {
        StatsCalculator::share(self.count, self.population)
    }

    pub fn max_bucket(&self) -> usize {
        self.histogram.as_ref().map_or(0, Histogram::max_count)
    }
}

/// Null and alternative hypothesis of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypotheses {
    pub null: String,
    pub alternative: String,
}

/// Two groups side by side with their significance test.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub title: String,
    pub min_sick_days: u32,
    pub first: GroupView,
    pub second: GroupView,
    /// How much more often the first group passes the threshold than the second.
    pub percent_difference: Result<f64, StatsError>,
    pub hypotheses: Hypotheses,
    /// Label of the test direction, e.g. "Women vs Men".
    pub test_label: String,
    pub t_test: Result<TTest, StatsError>,
    pub significance_level: f64,
}

impl Comparison {
    pub fn decision(&self) -> Option<Decision> {
        self.t_test
            .as_ref()
            .ok()
            .map(|t| t.decision(self.significance_level))
    }

    /// The hypothesis the test supports, `None` when the test could not run.
    pub fn accepted_hypothesis(&self) -> Option<&str> {
        self.decision().map(|decision| match decision {
            Decision::RejectNull => self.hypotheses.alternative.as_str(),
            Decision::RetainNull => self.hypotheses.null.as_str(),
        })
    }

    /// Shared y-axis ceiling for the two histograms.
    pub fn y_axis_max(&self, headroom: usize) -> usize {
        self.first.max_bucket().max(self.second.max_bucket()) + headroom
    }

    pub fn percent_sentence(&self) -> String {
        match &self.percent_difference {
            Ok(pct) => {
                let direction = if *pct >= 0.0 { "more" } else { "less" };
                format!(
                    "{} take more than {} sick days {:.0}% {} often than {}.",
                    self.first.label,
                    self.min_sick_days,
                    pct.abs(),
                    direction,
                    self.second.label.to_lowercase(),
                )
            }
            Err(_) => {
                let empty = if self.first.count == 0 {
                    &self.first
                } else {
                    &self.second
                };
                format!(
                    "Insufficient data: no {} with more than {} sick days to compare.",
                    empty.label.to_lowercase(),
                    self.min_sick_days,
                )
            }
        }
    }
}

/// Everything the dashboard shows for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub gender: Comparison,
    pub age: Comparison,
}

/// Compute the report. Pure: same inputs, same report.
pub fn render(dataset: &Dataset, controls: &Controls, config: &DashboardConfig) -> DashboardReport {
    DashboardReport {
        gender: gender_comparison(dataset.records(), controls.gender_min_days, config),
        age: age_comparison(
            dataset.records(),
            controls.age_min_days,
            controls.age_cutoff,
            controls.age_gender_filter,
            config,
        ),
    }
}

pub fn gender_comparison(
    records: &[SickLeaveRecord],
    min_days: u32,
    config: &DashboardConfig,
) -> Comparison {
    let men = RecordFilter::new(min_days).with_gender(Some(Gender::Male));
    let women = RecordFilter::new(min_days).with_gender(Some(Gender::Female));
    let first = GroupView::build(Gender::Male.display_name().to_string(), records, &men);
    let second = GroupView::build(Gender::Female.display_name().to_string(), records, &women);

    let hypotheses = Hypotheses {
        null: format!(
            "The mean number of sick days (more than {min_days} days) is the same for men and women."
        ),
        alternative: format!(
            "The mean number of sick days (more than {min_days} days) differs significantly between men and women."
        ),
    };

    // Women first, as in the dashboard's "Women vs Men" reading
    let t_test = two_sample_t_test(&second.values, &first.values, config.variance);

    Comparison {
        title: "Sick leave by gender".to_string(),
        min_sick_days: min_days,
        percent_difference: StatsCalculator::percent_difference(first.count, second.count),
        first,
        second,
        hypotheses,
        test_label: "Women vs Men".to_string(),
        t_test,
        significance_level: config.significance_level,
    }
}

pub fn age_comparison(
    records: &[SickLeaveRecord],
    min_days: u32,
    cutoff: u32,
    gender: Option<Gender>,
    config: &DashboardConfig,
) -> Comparison {
    let older = RecordFilter::new(min_days)
        .with_gender(gender)
        .with_age(AgeCut::Above(cutoff));
    let younger = RecordFilter::new(min_days)
        .with_gender(gender)
        .with_age(AgeCut::AtOrBelow(cutoff));
    let first = GroupView::build(format!("Employees older than {cutoff}"), records, &older);
    let second = GroupView::build(format!("Employees aged {cutoff} or younger"), records, &younger);

    let hypotheses = Hypotheses {
        null: format!(
            "The mean number of sick days (more than {min_days} days) is the same for employees older than {cutoff} and aged {cutoff} or younger."
        ),
        alternative: format!(
            "The mean number of sick days (more than {min_days} days) differs significantly between employees older than {cutoff} and aged {cutoff} or younger."
        ),
    };

    let t_test = two_sample_t_test(&first.values, &second.values, config.variance);

    let title = match gender {
        Some(g) => format!("Sick leave by age ({} only)", g.display_name().to_lowercase()),
        None => "Sick leave by age".to_string(),
    };

    Comparison {
        title,
        min_sick_days: min_days,
        percent_difference: StatsCalculator::percent_difference(first.count, second.count),
        first,
        second,
        hypotheses,
        test_label: "Old vs Young".to_string(),
        t_test,
        significance_level: config.significance_level,
    }
}
