//! Registry persistence over a key-value store.
//!
//! The whole registry is one JSON array stored under [`HABITS_KEY`]. It is
//! read once when the registry opens and rewritten after every mutation.

use tracing::debug;

use super::KeyValueStore;
use crate::error::{Result, StorageError};
use crate::habit::Habit;

/// Key the registry is stored under.
pub const HABITS_KEY: &str = "habits";

/// Serializes the habit list into a [`KeyValueStore`].
pub struct HabitStore<K> {
    kv: K,
}

impl<K: KeyValueStore> HabitStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Read the saved registry. `Ok(None)` means nothing was ever saved.
    ///
    /// # Errors
    /// Returns [`StorageError::Corrupt`] if the stored value is not a valid
    /// habit list, or the backend's error if the read fails.
    pub fn load(&self) -> Result<Option<Vec<Habit>>> {
        let Some(raw) = self.kv.get(HABITS_KEY)? else {
            return Ok(None);
        };
        let habits: Vec<Habit> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: HABITS_KEY.to_string(),
                message: e.to_string(),
            })?;
        debug!(count = habits.len(), "loaded habits");
        Ok(Some(habits))
    }

    /// Replace the saved registry with `habits`.
    pub fn save(&self, habits: &[Habit]) -> Result<()> {
        let raw = serde_json::to_string(habits)?;
        self.kv.set(HABITS_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn load_from_empty_store_is_none() {
        let store = HabitStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let store = HabitStore::new(MemoryStore::new());
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut habit = Habit::new("Walk", "#4CAF50");
        habit.toggle(today, today);
        habit.toggle(today.pred_opt().unwrap(), today);
        habit.toggle(today.pred_opt().unwrap(), today);

        store.save(std::slice::from_ref(&habit)).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, vec![habit]);
    }

    #[test]
    fn corrupt_value_is_reported() {
        let kv = MemoryStore::new();
        kv.set(HABITS_KEY, "{not json").unwrap();
        let store = HabitStore::new(kv);
        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Storage(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn reads_the_documented_wire_format() {
        let kv = MemoryStore::new();
        kv.set(
            HABITS_KEY,
            r##"[{"id":"1","name":"Exercise","entries":{"2024-01-01":true,"2024-01-02":0.5},"streak":2,"bestStreak":5,"color":"#FF5733"}]"##,
        )
        .unwrap();
        let habits = HabitStore::new(kv).load().unwrap().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].best_streak(), 5);
        assert_eq!(habits[0].entries().len(), 2);
    }
}
