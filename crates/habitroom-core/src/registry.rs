//! Habit registry.
//!
//! The ordered collection of habits plus the store it is written through.
//! Every successful mutation runs to completion (change, streak recompute,
//! full write) before returning. Requests that cannot apply (blank name,
//! unknown id, a date after today) are declined: state is left untouched,
//! nothing is written, and the call still returns `Ok`.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::entry::CompletionState;
use crate::error::Result;
use crate::habit::{pick_color, starter_habits, Habit};
use crate::stats::HabitStats;
use crate::storage::{Config, HabitStore, KeyValueStore};

/// Insertion-ordered habits backed by a key-value store.
pub struct HabitRegistry<K, C> {
    habits: Vec<Habit>,
    store: HabitStore<K>,
    clock: C,
    palette: Vec<String>,
}

impl<K: KeyValueStore, C: Clock> HabitRegistry<K, C> {
    /// Load the registry from `kv`.
    ///
    /// When nothing has been saved yet and `config.tracking.seed_defaults`
    /// is set, the starter habits are created and written immediately.
    ///
    /// # Errors
    /// Returns an error if the stored registry cannot be read or decoded, or
    /// if writing the starter habits fails.
    pub fn open(kv: K, clock: C, config: &Config) -> Result<Self> {
        let store = HabitStore::new(kv);
        let (habits, seeded) = match store.load()? {
            Some(habits) => (habits, false),
            None if config.tracking.seed_defaults => (starter_habits(), true),
            None => (Vec::new(), false),
        };

        let registry = Self {
            habits,
            store,
            clock,
            palette: config.palette.colors.clone(),
        };
        if seeded {
            registry.persist()?;
            info!(count = registry.habits.len(), "seeded starter habits");
        }
        info!(count = registry.habits.len(), "habit registry opened");
        Ok(registry)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id() == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Today according to the registry's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Add a habit with a random palette color.
    ///
    /// Returns `Ok(None)` when `name` is blank.
    pub fn add(&mut self, name: &str) -> Result<Option<&Habit>> {
        let color = pick_color(&self.palette);
        self.add_with_color(name, &color)
    }

    /// Add a habit with an explicit color.
    ///
    /// Returns `Ok(None)` when `name` is blank.
    pub fn add_with_color(&mut self, name: &str, color: &str) -> Result<Option<&Habit>> {
        if name.trim().is_empty() {
            warn!("declined add: blank habit name");
            return Ok(None);
        }

        let habit = Habit::new(name, color);
        info!(id = %habit.id(), name = %habit.name(), color = %habit.color(), "habit added");
        self.habits.push(habit);
        self.persist()?;
        Ok(self.habits.last())
    }

    /// Rename habit `id`. Returns whether anything changed.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool> {
        if name.trim().is_empty() {
            warn!(id, "declined rename: blank habit name");
            return Ok(false);
        }
        let Some(habit) = self.habits.iter_mut().find(|h| h.id() == id) else {
            warn!(id, "declined rename: unknown habit");
            return Ok(false);
        };

        habit.set_name(name.to_string());
        info!(id, name, "habit renamed");
        self.persist()?;
        Ok(true)
    }

    /// Delete habit `id` and its whole history. Confirmation is the
    /// caller's job. Returns whether a habit was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.habits.iter().position(|h| h.id() == id) else {
            warn!(id, "declined delete: unknown habit");
            return Ok(false);
        };

        let removed = self.habits.remove(index);
        info!(id, name = %removed.name(), entries = removed.entries().len(), "habit deleted");
        self.persist()?;
        Ok(true)
    }

    /// Toggle habit `id` on `date` and recompute its streaks.
    ///
    /// Returns the new state, or `Ok(None)` if the habit does not exist or
    /// `date` is after today.
    pub fn toggle_completion(
        &mut self,
        id: &str,
        date: NaiveDate,
    ) -> Result<Option<CompletionState>> {
        let today = self.clock.today();
        if date > today {
            warn!(id, %date, %today, "declined toggle: date is in the future");
            return Ok(None);
        }
        let Some(habit) = self.habits.iter_mut().find(|h| h.id() == id) else {
            warn!(id, "declined toggle: unknown habit");
            return Ok(None);
        };

        let state = habit.toggle(date, today);
        debug!(
            id,
            %date,
            %state,
            streak = habit.streak(),
            best_streak = habit.best_streak(),
            "habit toggled"
        );
        self.persist()?;
        Ok(Some(state))
    }

    /// Statistics cards for every habit, in registry order.
    pub fn stats(&self, window_days: u32) -> Vec<HabitStats> {
        let today = self.clock.today();
        self.habits
            .iter()
            .map(|h| HabitStats::compute(h, today, window_days))
            .collect()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.habits)
    }
}
