//! Subcommand implementations and the helpers they share.

pub mod config;
pub mod export;
pub mod habit;
pub mod stats;

use chrono::{Days, NaiveDate};
use clap::Args;
use habitroom_core::{Config, Database, HabitRegistry, SystemClock};

pub type Registry = HabitRegistry<Database, SystemClock>;

/// Open the registry in the data directory.
pub fn open_registry(config: &Config) -> Result<Registry, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(HabitRegistry::open(db, SystemClock, config)?)
}

/// Day selection shared by commands that act on one calendar day.
#[derive(Args, Debug, Default)]
pub struct DayArgs {
    /// Calendar date (YYYY-MM-DD); defaults to today
    #[arg(long, conflicts_with = "days_ago")]
    pub date: Option<String>,
    /// Number of days before today
    #[arg(long)]
    pub days_ago: Option<u64>,
}

impl DayArgs {
    /// Resolve to a date no later than `today`.
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate, Box<dyn std::error::Error>> {
        let date = match (&self.date, self.days_ago) {
            (Some(raw), _) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| format!("invalid date '{raw}': {e}"))?,
            (None, Some(n)) => today
                .checked_sub_days(Days::new(n))
                .ok_or_else(|| format!("{n} days ago is out of range"))?,
            (None, None) => today,
        };
        if date > today {
            return Err(format!("{date} is in the future (today is {today})").into());
        }
        Ok(date)
    }
}
