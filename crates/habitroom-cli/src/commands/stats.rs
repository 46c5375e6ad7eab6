use clap::Subcommand;
use habitroom_core::{chart_series, Config, HabitStats, MAX_WINDOW_DAYS};

use super::open_registry;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Streaks, lifetime counts and rolling completion rate
    Show {
        /// Habit ID (all habits if omitted)
        id: Option<String>,
        /// Rolling window in days (config `tracking.window_days` if omitted)
        #[arg(long, value_parser = window_days)]
        days: Option<u32>,
    },
    /// Per-day chart values, oldest first
    Chart {
        /// Habit ID
        id: String,
        /// Window in days (config `tracking.window_days` if omitted)
        #[arg(long, value_parser = window_days)]
        days: Option<u32>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let registry = open_registry(&config)?;
    let today = registry.today();

    match action {
        StatsAction::Show { id, days } => {
            let window = days.unwrap_or(config.tracking.window_days);
            match id {
                Some(id) => {
                    let habit = registry
                        .get(&id)
                        .ok_or_else(|| format!("habit not found: {id}"))?;
                    let stats = HabitStats::compute(habit, today, window);
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                None => {
                    let stats = registry.stats(window);
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
            }
        }
        StatsAction::Chart { id, days } => {
            let habit = registry
                .get(&id)
                .ok_or_else(|| format!("habit not found: {id}"))?;
            let window = days.unwrap_or(config.tracking.window_days);
            let points: Vec<_> = chart_series(habit.entries(), today, window).collect();
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
    }
    Ok(())
}

/// Parse `--days`, keeping it within `1..=MAX_WINDOW_DAYS`.
fn window_days(value: &str) -> Result<u32, String> {
    let days: u32 = value.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_WINDOW_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(format!("must be between 1 and {MAX_WINDOW_DAYS}"))
    }
}
