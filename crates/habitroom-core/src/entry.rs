//! Per-habit completion record.
//!
//! A habit's history is a sparse map from calendar date to
//! [`CompletionState`]. Only `Done` and `Partial` are ever stored; a date
//! with no key is `Unset`. The single mutation is [`EntryStore::toggle`],
//! which advances a date through the fixed cycle
//! `Unset -> Done -> Partial -> Unset`.
//!
//! On the wire a `Done` entry is the JSON boolean `true` and a `Partial`
//! entry is the number `0.5`.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Completion state of a habit on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompletionState {
    /// Fully completed; worth one credit.
    Done,
    /// Partially completed; half credit for statistics, full credit for streaks.
    Partial,
    /// Not completed. Never stored.
    #[default]
    Unset,
}

impl CompletionState {
    /// Successor in the toggle cycle.
    pub fn next(self) -> Self {
        match self {
            CompletionState::Unset => CompletionState::Done,
            CompletionState::Done => CompletionState::Partial,
            CompletionState::Partial => CompletionState::Unset,
        }
    }

    /// Whether the day keeps a streak alive.
    pub fn is_marked(self) -> bool {
        !matches!(self, CompletionState::Unset)
    }

    /// Statistics credit: 1 for done, 0.5 for partial, 0 otherwise.
    pub fn credit(self) -> f64 {
        match self {
            CompletionState::Done => 1.0,
            CompletionState::Partial => 0.5,
            CompletionState::Unset => 0.0,
        }
    }

    /// Status column text used by the CSV export.
    pub fn status_label(self) -> &'static str {
        match self {
            CompletionState::Done => "Completed",
            CompletionState::Partial => "Partial",
            CompletionState::Unset => "Missed",
        }
    }

    /// Short marker shown in a day view.
    pub fn glyph(self) -> &'static str {
        match self {
            CompletionState::Done => "✓",
            CompletionState::Partial => "½",
            CompletionState::Unset => "",
        }
    }
}

impl fmt::Display for CompletionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompletionState::Done => "done",
            CompletionState::Partial => "partial",
            CompletionState::Unset => "unset",
        };
        f.write_str(s)
    }
}

impl Serialize for CompletionState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CompletionState::Done => serializer.serialize_bool(true),
            CompletionState::Partial => serializer.serialize_f64(0.5),
            CompletionState::Unset => serializer.serialize_bool(false),
        }
    }
}

struct CompletionStateVisitor;

impl<'de> Visitor<'de> for CompletionStateVisitor {
    type Value = CompletionState;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`true`, `0.5`, `false`, `0` or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(if v {
            CompletionState::Done
        } else {
            CompletionState::Unset
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v == 0.5 {
            Ok(CompletionState::Partial)
        } else if v == 0.0 {
            Ok(CompletionState::Unset)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v == 0 {
            Ok(CompletionState::Unset)
        } else {
            Err(E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if v == 0 {
            Ok(CompletionState::Unset)
        } else {
            Err(E::invalid_value(de::Unexpected::Signed(v), &self))
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CompletionState::Unset)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CompletionState::Unset)
    }
}

impl<'de> Deserialize<'de> for CompletionState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CompletionStateVisitor)
    }
}

/// Sparse date -> state map for one habit, in insertion order.
///
/// Re-marking a date that was cleared moves it to the end; flipping
/// `Done` to `Partial` keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: IndexMap<NaiveDate, CompletionState>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// State recorded for `date`; `Unset` when absent.
    pub fn get(&self, date: NaiveDate) -> CompletionState {
        self.entries
            .get(&date)
            .copied()
            .unwrap_or(CompletionState::Unset)
    }

    /// Advance `date` one step through the toggle cycle and return the new
    /// state. Does not look at the clock.
    pub fn toggle(&mut self, date: NaiveDate) -> CompletionState {
        let next = self.get(date).next();
        match next {
            CompletionState::Unset => {
                self.entries.shift_remove(&date);
            }
            marked => {
                self.entries.insert(date, marked);
            }
        }
        next
    }

    /// Recorded entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, CompletionState)> + '_ {
        self.entries.iter().map(|(date, state)| (*date, *state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EntryStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntryStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = IndexMap::<NaiveDate, CompletionState>::deserialize(deserializer)?;
        // Older payloads may carry explicit falsy markers; drop them.
        entries.retain(|_, state| state.is_marked());
        Ok(Self { entries })
    }
}
