//! Habit management commands for CLI.

use clap::Subcommand;
use habitroom_core::Config;
use std::io::{BufRead, Write};

use super::{open_registry, DayArgs};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Accent color (random palette color if omitted)
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename a habit
    Rename {
        /// Habit ID
        id: String,
        /// New name
        name: String,
    },
    /// Delete a habit and all of its entries
    Delete {
        /// Habit ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List habits
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Cycle a day's state: unset -> done -> partial -> unset
    Toggle {
        /// Habit ID
        id: String,
        #[command(flatten)]
        day: DayArgs,
    },
    /// Show every habit's state for one day
    Day {
        #[command(flatten)]
        day: DayArgs,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut registry = open_registry(&config)?;

    match action {
        HabitAction::Add { name, color } => {
            let added = match color {
                Some(color) => registry.add_with_color(&name, &color)?,
                None => registry.add(&name)?,
            };
            match added {
                Some(habit) => {
                    println!("Habit created: {}", habit.id());
                    println!("{}", serde_json::to_string_pretty(habit)?);
                }
                None => return Err("habit name must not be blank".into()),
            }
        }
        HabitAction::Rename { id, name } => {
            if !registry.rename(&id, &name)? {
                return Err(format!("cannot rename '{id}': unknown habit or blank name").into());
            }
            println!("ok");
        }
        HabitAction::Delete { id, yes } => {
            let Some(habit) = registry.get(&id) else {
                return Err(format!("habit not found: {id}").into());
            };
            if !yes && !confirm(&format!(
                "Delete '{}'? All tracking data will be lost. [y/N] ",
                habit.name()
            ))? {
                println!("cancelled");
                return Ok(());
            }
            registry.delete(&id)?;
            println!("deleted {id}");
        }
        HabitAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(registry.habits())?);
            } else {
                println!("Active habits: {}", registry.len());
                for habit in registry.habits() {
                    println!(
                        "{}  {:<24} streak {:>3}  best {:>3}  {}",
                        habit.id(),
                        habit.name(),
                        habit.streak(),
                        habit.best_streak(),
                        habit.color()
                    );
                }
            }
        }
        HabitAction::Toggle { id, day } => {
            let date = day.resolve(registry.today())?;
            let Some(state) = registry.toggle_completion(&id, date)? else {
                return Err(format!("habit not found: {id}").into());
            };
            let habit = registry
                .get(&id)
                .ok_or_else(|| format!("habit not found: {id}"))?;
            println!(
                "{} {}: {} (streak {}, best {})",
                date,
                habit.name(),
                state,
                habit.streak(),
                habit.best_streak()
            );
        }
        HabitAction::Day { day } => {
            let date = day.resolve(registry.today())?;
            println!("{}", date.format("%A, %B %-d"));
            for habit in registry.habits() {
                let state = habit.entries().get(date);
                println!("{:>1}  {:<24} {}", state.glyph(), habit.name(), habit.id());
            }
        }
    }
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(prompt: &str) -> std::io::Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
