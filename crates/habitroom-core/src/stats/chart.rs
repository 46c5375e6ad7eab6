//! Per-day chart series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::completion::window_start;
use crate::entry::EntryStore;

/// One bar of a habit chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// `MM-DD`
    pub label: String,
    /// 0, 0.5 or 1
    pub value: f64,
}

/// Lazy series over a date window, oldest day first.
///
/// Nothing is computed until iterated; cloning the series restarts it.
#[derive(Debug, Clone)]
pub struct ChartSeries<'a> {
    entries: &'a EntryStore,
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl<'a> Iterator for ChartSeries<'a> {
    type Item = ChartPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.filter(|d| *d <= self.end)?;
        self.next = date.succ_opt();
        Some(ChartPoint {
            date,
            label: date.format("%m-%d").to_string(),
            value: self.entries.get(date).credit(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .filter(|d| *d <= self.end)
            .map(|d| (self.end - d).num_days() as usize + 1)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChartSeries<'_> {}

/// Series of the `window_days` days ending at `today`.
pub fn chart_series(entries: &EntryStore, today: NaiveDate, window_days: u32) -> ChartSeries<'_> {
    ChartSeries {
        entries,
        next: window_start(today, window_days),
        end: today,
    }
}
