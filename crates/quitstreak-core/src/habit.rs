//! Habit model.
//!
//! A [`Habit`] carries the live clean streak plus an append-only history of
//! prior streaks that ended in relapse. Field names serialize in camelCase
//! so the persisted blob matches the registry's storage contract.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A habit the user is trying to quit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Opaque unique registry key, assigned at creation, immutable.
    pub id: i64,
    /// Display name, mutable via rename.
    pub name: String,
    /// Whole days clean since `started_on`, inclusive of the start day
    /// once rolled over. May go stale between rollovers, never negative.
    #[serde(default, deserialize_with = "de_streak")]
    pub streak: u32,
    /// Start of the current clean streak. Reset on every relapse.
    pub started_on: DateTime<Utc>,
    /// Last calendar day for which `streak` was recomputed. Gates the
    /// rollover pass so it never runs time backward.
    #[serde(deserialize_with = "de_calendar_day")]
    pub last_updated: NaiveDate,
    /// Past streaks, chronological, append-only.
    #[serde(default)]
    pub history: Vec<StreakRecord>,
}

impl Habit {
    /// Calendar day on which the current streak began.
    pub fn start_day(&self) -> NaiveDate {
        self.started_on.date_naive()
    }
}

/// One archived streak: start instant, relapse day, and length in days.
/// Immutable once appended to a habit's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    #[serde(rename = "start")]
    pub started: DateTime<Utc>,
    #[serde(rename = "end", deserialize_with = "de_calendar_day")]
    pub ended: NaiveDate,
    pub streak: u32,
}

/// Lenient streak field: absent, negative, or non-numeric values collapse
/// to 0 instead of failing the whole load.
fn de_streak<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .map(|n| n.min(u64::from(u32::MAX)) as u32)
        .unwrap_or(0))
}

/// Calendar-day field that also accepts a full RFC 3339 timestamp.
/// Older blobs stored the creation instant here; only the day matters.
fn de_calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(day) = raw.parse::<NaiveDate>() {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(serde::de::Error::custom)
}
