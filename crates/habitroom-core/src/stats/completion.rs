//! Completion rate and lifetime counts.
//!
//! Credits follow [`CompletionState::credit`]: a done day is worth one, a
//! partial day half, an unmarked day nothing.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entry::{CompletionState, EntryStore};

/// Default rolling window, in days.
pub const WEEK_DAYS: u32 = 7;

/// Longest window any statistic looks at. Larger requests are clamped.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Lifetime totals of done and partial entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCounts {
    pub completed: u32,
    pub partial: u32,
}

/// First day of the inclusive window of `window_days` days ending at
/// `today`, or `None` for an empty window. The window is capped at
/// [`MAX_WINDOW_DAYS`] and clamped at the earliest representable date.
pub(crate) fn window_start(today: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    let span = window_days.min(MAX_WINDOW_DAYS).checked_sub(1)?;
    Some(
        today
            .checked_sub_days(Days::new(u64::from(span)))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// Completion percentage over the `window_days` days ending at `today`,
/// rounded to the nearest whole percent. Returns 0 for an empty window.
pub fn completion_rate(entries: &EntryStore, today: NaiveDate, window_days: u32) -> u32 {
    let Some(start) = window_start(today, window_days) else {
        return 0;
    };

    let mut credits = 0.0;
    let mut days = 0u32;
    for date in start.iter_days().take_while(|d| *d <= today) {
        days += 1;
        credits += entries.get(date).credit();
    }

    if days == 0 {
        return 0;
    }
    (credits / f64::from(days) * 100.0).round() as u32
}

/// Completion percentage over `[today - 6, today]`.
pub fn weekly_completion_rate(entries: &EntryStore, today: NaiveDate) -> u32 {
    completion_rate(entries, today, WEEK_DAYS)
}

/// Count done and partial entries across the whole history.
pub fn aggregate_counts(entries: &EntryStore) -> AggregateCounts {
    entries
        .iter()
        .fold(AggregateCounts::default(), |mut acc, (_, state)| {
            match state {
                CompletionState::Done => acc.completed += 1,
                CompletionState::Partial => acc.partial += 1,
                CompletionState::Unset => {}
            }
            acc
        })
}
