//! Charts module - Chart rendering

mod plotter;

pub use plotter::{
    ChartPlotter, MEN_COLOR, NOTICE_COLOR, OLDER_COLOR, WOMEN_COLOR, YOUNGER_COLOR,
};
