//! Habit record.
//!
//! A habit owns its entry store together with the streak fields derived
//! from it. The streak fields are only written by [`Habit::toggle`], right
//! after the entry changes, so `best_streak >= streak` holds after every
//! mutation.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::{CompletionState, EntryStore};
use crate::streak::{compute_streak, StreakSummary};

/// Accent colors assigned to new habits.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#FF5733", "#33A1FD", "#33FD92", "#A64DFF", "#FF4D94", "#FFD700", "#4CAF50",
];

/// A tracked habit.
///
/// Serialized with the persisted field names `id`, `name`, `entries`,
/// `streak`, `bestStreak`, `color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    id: String,
    name: String,
    #[serde(default)]
    entries: EntryStore,
    #[serde(default)]
    streak: u32,
    #[serde(default)]
    best_streak: u32,
    color: String,
}

impl Habit {
    /// New habit with a fresh id and no history. `name` is stored as given;
    /// blank names are refused by the registry, not here.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            entries: EntryStore::new(),
            streak: 0,
            best_streak: 0,
            color: color.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn entries(&self) -> &EntryStore {
        &self.entries
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn summary(&self) -> StreakSummary {
        StreakSummary {
            streak: self.streak,
            best_streak: self.best_streak,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Advance `date` through the toggle cycle and recompute both streak
    /// fields against `today` in the same step.
    pub fn toggle(&mut self, date: NaiveDate, today: NaiveDate) -> CompletionState {
        let state = self.entries.toggle(date);
        let StreakSummary {
            streak,
            best_streak,
        } = compute_streak(&self.entries, today, self.best_streak);
        self.streak = streak;
        self.best_streak = best_streak;
        state
    }
}

/// Pick a random color from `palette`, falling back to [`DEFAULT_PALETTE`]
/// when it is empty.
pub fn pick_color(palette: &[String]) -> String {
    let mut rng = rand::thread_rng();
    match palette.choose(&mut rng) {
        Some(color) => color.clone(),
        None => DEFAULT_PALETTE
            .choose(&mut rng)
            .copied()
            .unwrap_or(DEFAULT_PALETTE[0])
            .to_string(),
    }
}

/// Habits offered to a first-time user.
pub fn starter_habits() -> Vec<Habit> {
    [
        ("Exercise", "#FF5733"),
        ("Meditation", "#33A1FD"),
        ("Reading", "#33FD92"),
    ]
    .into_iter()
    .map(|(name, color)| Habit::new(name, color))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn new_habit_starts_empty() {
        let habit = Habit::new("Run", "#FF5733");
        assert_eq!(habit.name(), "Run");
        assert_eq!(habit.streak(), 0);
        assert_eq!(habit.best_streak(), 0);
        assert!(habit.entries().is_empty());
        assert!(Uuid::parse_str(habit.id()).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let a = Habit::new("A", "#000000");
        let b = Habit::new("A", "#000000");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn toggle_updates_streak_and_best_together() {
        let mut habit = Habit::new("Run", "#FF5733");
        let yesterday = today().pred_opt().unwrap();

        assert_eq!(habit.toggle(yesterday, today()), CompletionState::Done);
        assert_eq!(habit.summary(), StreakSummary { streak: 0, best_streak: 0 });

        habit.toggle(today(), today());
        assert_eq!(habit.summary(), StreakSummary { streak: 2, best_streak: 2 });

        // Done -> Partial keeps the streak alive.
        assert_eq!(habit.toggle(today(), today()), CompletionState::Partial);
        assert_eq!(habit.streak(), 2);

        // Partial -> Unset drops it, best stays.
        assert_eq!(habit.toggle(today(), today()), CompletionState::Unset);
        assert_eq!(habit.summary(), StreakSummary { streak: 0, best_streak: 2 });
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let mut habit = Habit::new("Read", "#33FD92");
        habit.toggle(today(), today());
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["name"], "Read");
        assert_eq!(json["bestStreak"], 1);
        assert_eq!(json["streak"], 1);
        assert_eq!(json["entries"]["2024-05-10"], true);
        assert_eq!(json["color"], "#33FD92");
    }

    #[test]
    fn deserializes_minimal_record() {
        let habit: Habit =
            serde_json::from_str(r##"{"id":"1","name":"Exercise","color":"#FF5733"}"##).unwrap();
        assert_eq!(habit.id(), "1");
        assert!(habit.entries().is_empty());
        assert_eq!(habit.best_streak(), 0);
    }

    #[test]
    fn pick_color_uses_palette() {
        let palette = vec!["#123456".to_string()];
        assert_eq!(pick_color(&palette), "#123456");
        assert!(DEFAULT_PALETTE.contains(&pick_color(&[]).as_str()));
    }

    #[test]
    fn starter_habits_are_named_and_colored() {
        let names: Vec<_> = starter_habits()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        assert_eq!(names, vec!["Exercise", "Meditation", "Reading"]);
    }
}
