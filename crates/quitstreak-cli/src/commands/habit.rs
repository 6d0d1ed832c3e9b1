//! Habit tracking commands for CLI.
//!
//! Every command follows the same host flow: load the blob, run the
//! rollover pass for today, apply the action, persist, print.

use chrono::{DateTime, Utc};
use clap::Subcommand;
use quitstreak_core::{display_streak, relapse, rollover_all, Habit, HabitStore};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Start tracking a habit to quit
    Add {
        /// Habit name (e.g. "Smoking")
        name: String,
    },
    /// Rename a tracked habit
    Rename {
        /// Habit ID
        id: i64,
        /// New name
        name: String,
    },
    /// Break the current clean streak and archive it
    Relapse {
        /// Habit ID
        id: i64,
    },
    /// List tracked habits with their streaks
    List {
        /// Print the raw registry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Stop tracking a habit
    Remove {
        /// Habit ID
        id: i64,
    },
}

pub fn run(action: HabitAction, now: DateTime<Utc>) -> Result<(), Box<dyn std::error::Error>> {
    let store = HabitStore::open()?;
    let mut registry = store.load()?;
    let today = now.date_naive();
    rollover_all(&mut registry, today);

    match action {
        HabitAction::Add { name } => {
            let habit = registry.create(&name, now)?;
            store.save(&registry)?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Rename { id, name } => {
            let habit = registry.rename(id, &name)?.clone();
            store.save(&registry)?;
            println!("Habit renamed:");
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Relapse { id } => {
            let habit = relapse(&mut registry, id, today)?.clone();
            store.save(&registry)?;
            println!("Streak broken: {}", habit.name);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List { json } => {
            // The rollover above may have advanced streaks; keep the blob
            // in sync even for a read-only listing.
            store.save(&registry)?;
            if json {
                println!("{}", serde_json::to_string_pretty(registry.habits())?);
            } else if registry.is_empty() {
                println!("No habits tracked yet.");
            } else {
                for habit in registry.habits() {
                    print_habit(habit);
                }
            }
        }
        HabitAction::Remove { id } => {
            let habit = registry.remove(id)?;
            store.save(&registry)?;
            println!("Habit removed: {}", habit.name);
        }
    }
    Ok(())
}

fn print_habit(habit: &Habit) {
    println!(
        "[{}] {}: clean for {} (started {})",
        habit.id,
        habit.name,
        display_streak(habit),
        habit.started_on.format("%Y-%m-%d"),
    );
    if !habit.history.is_empty() {
        println!("    previous streaks:");
        for record in &habit.history {
            println!(
                "      {} -> {} ({} days)",
                record.started.format("%Y-%m-%d"),
                record.ended,
                record.streak,
            );
        }
    }
}
