//! Analysis module - dashboard state and the report derived from it

mod report;
mod state;

pub use report::{
    age_comparison, gender_comparison, render, Comparison, DashboardReport, GroupView, Hypotheses,
};
pub use state::{Controls, DashboardState};
