//! Statistics module for Habitroom
//!
//! Rolling completion rates, lifetime counts and chart series. Everything
//! here is computed on demand from an entry store and a date; nothing is
//! cached or persisted.

mod chart;
mod completion;
mod summary;

pub use chart::{chart_series, ChartPoint, ChartSeries};
pub use completion::{
    aggregate_counts, completion_rate, weekly_completion_rate, AggregateCounts, MAX_WINDOW_DAYS,
    WEEK_DAYS,
};
pub use summary::HabitStats;
