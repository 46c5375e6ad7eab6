//! Streak engine.
//!
//! A streak is the run of consecutive marked days (done or partial) ending
//! at today. Partial days count exactly like done days here; the half
//! credit only matters to statistics.
//!
//! The computation first looks at yesterday. If yesterday is unmarked the
//! streak can only be today's own mark, so nothing further back is read.
//! Otherwise it walks backward from today until the first unmarked day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::EntryStore;

/// Current and best streak of one habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub streak: u32,
    pub best_streak: u32,
}

/// Compute the streak ending at `today`.
///
/// `best_streak` is `max(previous_best, streak)`, so it never decreases
/// across calls that feed the previous result back in.
pub fn compute_streak(entries: &EntryStore, today: NaiveDate, previous_best: u32) -> StreakSummary {
    let streak = match today.pred_opt() {
        Some(yesterday) if !entries.get(yesterday).is_marked() && yesterday < today => {
            u32::from(entries.get(today).is_marked())
        }
        _ => walk_back(entries, today),
    };

    StreakSummary {
        streak,
        best_streak: previous_best.max(streak),
    }
}

/// Count marked days from `start` backward, stopping at the first gap.
fn walk_back(entries: &EntryStore, start: NaiveDate) -> u32 {
    let mut count = 0;
    let mut cursor = Some(start);
    while let Some(date) = cursor {
        if !entries.get(date).is_marked() {
            break;
        }
        count += 1;
        cursor = date.pred_opt();
    }
    count
}
