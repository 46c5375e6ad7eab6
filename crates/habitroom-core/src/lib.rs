//! # Habitroom Core Library
//!
//! This library provides the core logic for Habitroom, a habit streak
//! tracker. All operations are available through the standalone CLI binary,
//! which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Entry Store**: sparse per-day completion record with a three-state
//!   toggle cycle
//! - **Streak Engine**: current and best streak from an entry store and a date
//! - **Statistics**: rolling completion rate, lifetime counts, chart series
//! - **Registry**: ordered habit collection, written through a key-value
//!   store after every mutation
//! - **Storage**: SQLite key-value store and TOML configuration
//!
//! ## Key Components
//!
//! - [`HabitRegistry`]: add / rename / delete / toggle
//! - [`compute_streak`]: the streak engine
//! - [`Database`]: SQLite-backed [`KeyValueStore`]
//! - [`Config`]: application configuration management

pub mod clock;
pub mod entry;
pub mod error;
pub mod export;
pub mod habit;
pub mod registry;
pub mod stats;
pub mod storage;
pub mod streak;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{CompletionState, EntryStore};
pub use error::{ConfigError, CoreError, StorageError};
pub use export::{export_csv, write_csv};
pub use habit::{Habit, DEFAULT_PALETTE};
pub use registry::HabitRegistry;
pub use stats::{
    aggregate_counts, chart_series, completion_rate, weekly_completion_rate, AggregateCounts,
    ChartPoint, HabitStats, MAX_WINDOW_DAYS,
};
pub use storage::{Config, Database, HabitStore, KeyValueStore, MemoryStore};
pub use streak::{compute_streak, StreakSummary};
