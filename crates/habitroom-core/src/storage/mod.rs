mod config;
pub mod database;
mod habit_store;
mod memory;

pub use config::{Config, ExportConfig, PaletteConfig, TrackingConfig};
pub use database::Database;
pub use habit_store::{HabitStore, HABITS_KEY};
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Minimal key-value persistence the registry is written through.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `HABITROOM_DATA_DIR` wins when set. Otherwise `~/.config/habitroom/`,
/// or `~/.config/habitroom-dev/` when `HABITROOM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HABITROOM_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITROOM_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habitroom-dev")
            } else {
                base_dir.join("habitroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
