//! Streak engine.
//!
//! All date-driven computation over the registry lives here: elapsed-day
//! math, the daily rollover pass, and the relapse transition. The engine
//! is stateless -- it receives the registry and an explicit `today` and
//! mutates in place, keeping every call deterministic (no hidden clock).
//!
//! ## Streak lifecycle
//!
//! ```text
//! ACTIVE --rollover (day advances)--> ACTIVE (streak recomputed)
//! ACTIVE --relapse--> ACTIVE (fresh start, one history record appended)
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::habit::{Habit, StreakRecord};
use crate::registry::HabitRegistry;

/// Whole calendar days between two date-only values.
///
/// Calendar-day truncation, not wall-clock duration: `today == started_on`
/// is 0 elapsed days, and the inclusive display convention turns that into
/// a streak of 1. Negative when `today` precedes `started_on`.
pub fn elapsed_days(started_on: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(started_on).num_days()
}

/// Recompute every habit's streak for `today`.
///
/// The streak is a pure function of the start day, so this pass is
/// idempotent: running it twice with the same `today` is a fixed point,
/// and rolling over via any intermediate day converges to the same state
/// as rolling over directly. A habit whose `last_updated` lies after
/// `today` is left untouched -- time never runs backward.
///
/// Designed to run once per session or day boundary, not per render.
pub fn rollover_all(registry: &mut HabitRegistry, today: NaiveDate) {
    for habit in registry.habits_mut() {
        if today < habit.last_updated {
            continue;
        }
        // Start day counts as day 1. A start day in the future clamps to 0
        // elapsed so the streak stays non-negative.
        habit.streak = elapsed_days(habit.start_day(), today).max(0) as u32 + 1;
        habit.last_updated = today;
    }
}

/// End the current clean streak of habit `id`.
///
/// Archives exactly one `{start, end, streak}` record to the habit's
/// history (the sole writer of history, always appending, never editing
/// prior records), then restarts counting from `today`.
///
/// # Errors
///
/// Returns [`CoreError::UnknownHabit`] if the id is absent; the registry
/// is untouched on error.
pub fn relapse(registry: &mut HabitRegistry, id: i64, today: NaiveDate) -> Result<&Habit> {
    let habit = registry
        .get_mut(id)
        .ok_or(CoreError::UnknownHabit { id })?;
    habit.history.push(StreakRecord {
        started: habit.started_on,
        ended: today,
        streak: habit.streak,
    });
    habit.started_on = midnight_utc(today);
    habit.last_updated = today;
    habit.streak = 0;
    Ok(&*habit)
}

/// Presentation-normalized streak: the stored value may legitimately be 0
/// for a just-created or just-relapsed habit, but the inclusive counting
/// convention means the user is on clean day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakDisplay {
    /// Normalized day count, never below 1.
    pub days: u32,
    /// Whether the "days" suffix applies (plural unless `days == 1`).
    pub plural: bool,
}

impl fmt::Display for StreakDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plural {
            write!(f, "{} days", self.days)
        } else {
            write!(f, "{} day", self.days)
        }
    }
}

/// Normalize a habit's streak for display. The stored value stays raw;
/// only the presentation boundary applies this.
pub fn display_streak(habit: &Habit) -> StreakDisplay {
    let days = habit.streak.max(1);
    StreakDisplay {
        days,
        plural: days != 1,
    }
}

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn registry_started_on(start: &str) -> (HabitRegistry, i64) {
        let mut registry = HabitRegistry::new();
        let habit = registry
            .create("Smoking", midnight_utc(day(start)))
            .unwrap();
        (registry, habit.id)
    }

    #[test]
    fn elapsed_days_same_day_is_zero() {
        assert_eq!(elapsed_days(day("2024-01-01"), day("2024-01-01")), 0);
    }

    #[test]
    fn elapsed_days_counts_whole_calendar_days() {
        assert_eq!(elapsed_days(day("2024-01-01"), day("2024-01-04")), 3);
        // Across the leap day.
        assert_eq!(elapsed_days(day("2024-02-28"), day("2024-03-01")), 2);
    }

    #[test]
    fn rollover_on_start_day_sets_inclusive_streak_of_one() {
        let (mut registry, id) = registry_started_on("2024-01-01");
        rollover_all(&mut registry, day("2024-01-01"));
        let habit = registry.get(id).unwrap();
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.last_updated, day("2024-01-01"));
    }

    #[test]
    fn rollover_advances_streak_with_the_calendar() {
        let (mut registry, id) = registry_started_on("2024-01-01");
        rollover_all(&mut registry, day("2024-01-01"));
        rollover_all(&mut registry, day("2024-01-04"));
        let habit = registry.get(id).unwrap();
        assert_eq!(habit.streak, 4);
        assert_eq!(habit.last_updated, day("2024-01-04"));
    }

    #[test]
    fn rollover_same_day_is_a_fixed_point() {
        let (mut registry, _) = registry_started_on("2024-01-01");
        rollover_all(&mut registry, day("2024-01-04"));
        let once = registry.clone();
        rollover_all(&mut registry, day("2024-01-04"));
        assert_eq!(registry, once);
    }

    #[test]
    fn rollover_via_intermediate_day_converges() {
        let (mut stepped, _) = registry_started_on("2024-01-01");
        rollover_all(&mut stepped, day("2024-01-02"));
        rollover_all(&mut stepped, day("2024-01-07"));

        let (mut direct, _) = registry_started_on("2024-01-01");
        rollover_all(&mut direct, day("2024-01-07"));

        assert_eq!(stepped, direct);
    }

    #[test]
    fn rollover_never_runs_time_backward() {
        let (mut registry, _) = registry_started_on("2024-01-01");
        rollover_all(&mut registry, day("2024-01-04"));
        let before = registry.clone();
        rollover_all(&mut registry, day("2024-01-02"));
        assert_eq!(registry, before);
    }

    #[test]
    fn rollover_clamps_future_start_day() {
        let (mut registry, id) = registry_started_on("2024-06-01");
        // Force a state where the start lies beyond the rollover day.
        registry.get_mut(id).unwrap().last_updated = day("2024-01-01");
        rollover_all(&mut registry, day("2024-01-02"));
        assert_eq!(registry.get(id).unwrap().streak, 1);
    }

    #[test]
    fn relapse_archives_streak_and_restarts() {
        let (mut registry, id) = registry_started_on("2024-01-01");
        rollover_all(&mut registry, day("2024-01-04"));

        let habit = relapse(&mut registry, id, day("2024-01-04")).unwrap();
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.started_on, midnight_utc(day("2024-01-04")));
        assert_eq!(habit.last_updated, day("2024-01-04"));
        assert_eq!(
            habit.history,
            vec![StreakRecord {
                started: midnight_utc(day("2024-01-01")),
                ended: day("2024-01-04"),
                streak: 4,
            }]
        );
    }

    #[test]
    fn relapse_appends_one_record_and_preserves_prior_ones() {
        let (mut registry, id) = registry_started_on("2024-01-01");
        rollover_all(&mut registry, day("2024-01-04"));
        relapse(&mut registry, id, day("2024-01-04")).unwrap();
        let first = registry.get(id).unwrap().history.clone();

        rollover_all(&mut registry, day("2024-01-10"));
        relapse(&mut registry, id, day("2024-01-10")).unwrap();
        let history = &registry.get(id).unwrap().history;

        assert_eq!(history.len(), 2);
        assert_eq!(&history[..1], &first[..]);
        assert_eq!(history[1].ended, day("2024-01-10"));
        assert_eq!(history[1].streak, 7);
    }

    #[test]
    fn relapse_unknown_id_fails_without_mutation() {
        let (mut registry, _) = registry_started_on("2024-01-01");
        let before = registry.clone();
        assert!(matches!(
            relapse(&mut registry, 42, day("2024-01-04")),
            Err(CoreError::UnknownHabit { id: 42 })
        ));
        assert_eq!(registry, before);
    }

    #[test]
    fn display_streak_never_shows_zero() {
        let (mut registry, id) = registry_started_on("2024-01-01");
        let fresh = display_streak(registry.get(id).unwrap());
        assert_eq!(fresh.days, 1);
        assert!(!fresh.plural);
        assert_eq!(fresh.to_string(), "1 day");

        rollover_all(&mut registry, day("2024-01-04"));
        let rolled = display_streak(registry.get(id).unwrap());
        assert_eq!(rolled.days, 4);
        assert!(rolled.plural);
        assert_eq!(rolled.to_string(), "4 days");

        relapse(&mut registry, id, day("2024-01-04")).unwrap();
        let reset = display_streak(registry.get(id).unwrap());
        assert_eq!(reset.days, 1);
        assert!(!reset.plural);
    }
}
