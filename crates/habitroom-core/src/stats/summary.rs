//! Per-habit statistics card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::completion::{aggregate_counts, completion_rate, MAX_WINDOW_DAYS};
use crate::habit::Habit;

/// Derived, never persisted view of one habit's numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    pub id: String,
    pub name: String,
    pub streak: u32,
    pub best_streak: u32,
    pub completed: u32,
    pub partial: u32,
    /// Whole percent over the rolling window.
    pub window_rate: u32,
    pub window_days: u32,
}

impl HabitStats {
    pub fn compute(habit: &Habit, today: NaiveDate, window_days: u32) -> Self {
        let counts = aggregate_counts(habit.entries());
        Self {
            id: habit.id().to_string(),
            name: habit.name().to_string(),
            streak: habit.streak(),
            best_streak: habit.best_streak(),
            completed: counts.completed,
            partial: counts.partial,
            window_rate: completion_rate(habit.entries(), today, window_days),
            window_days: window_days.min(MAX_WINDOW_DAYS),
        }
    }

    /// Rate as shown on the dashboard, e.g. `21%`.
    pub fn rate_label(&self) -> String {
        format!("{}%", self.window_rate)
    }
}
