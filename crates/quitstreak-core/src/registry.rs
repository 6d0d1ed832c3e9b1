//! Habit registry.
//!
//! The registry exclusively owns the collection of habits, in insertion
//! order (which is also display order). It is serde-transparent over the
//! underlying vector, so the persisted blob is exactly the habit array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::habit::Habit;

/// Ordered collection of tracked habits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitRegistry {
    habits: Vec<Habit>,
}

impl HabitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new habit.
    ///
    /// The fresh habit has a unique id, a zero streak, an empty history,
    /// and `started_on`/`last_updated` anchored at `now`. The first
    /// rollover pass lifts the streak to its inclusive day count.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyName`] if `name` trims to nothing. The
    /// registry is untouched on error.
    pub fn create(&mut self, name: &str, now: DateTime<Utc>) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        let habit = Habit {
            id: self.next_id(now),
            name: name.to_string(),
            streak: 0,
            started_on: now,
            last_updated: now.date_naive(),
            history: Vec::new(),
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Rename a habit. Touches `name` only, never the streak fields.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownHabit`] for an absent id and
    /// [`CoreError::EmptyName`] for an empty name; no mutation either way.
    pub fn rename(&mut self, id: i64, new_name: &str) -> Result<&Habit> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        let habit = self.get_mut(id).ok_or(CoreError::UnknownHabit { id })?;
        habit.name = new_name.to_string();
        Ok(&*habit)
    }

    /// Stop tracking a habit, returning it.
    ///
    /// Removal is a host-layer operation; the engine itself never deletes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownHabit`] if the id is absent.
    pub fn remove(&mut self, id: i64) -> Result<Habit> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id == id)
            .ok_or(CoreError::UnknownHabit { id })?;
        Ok(self.habits.remove(index))
    }

    /// Read-only snapshot of all habits in insertion order.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: i64) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: i64) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    pub(crate) fn habits_mut(&mut self) -> &mut [Habit] {
        &mut self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Next unique id: epoch-millisecond seed, bumped past every existing
    /// id so that same-instant creations never collide.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let seed = now.timestamp_millis();
        match self.habits.iter().map(|h| h.id).max() {
            Some(max) if seed <= max => max + 1,
            _ => seed,
        }
    }
}
