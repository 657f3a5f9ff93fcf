//! Event records.
//!
//! `RawEvent` is the stored/bundled form of an event. `MaterializedEvent`
//! is a raw event resolved to absolute instants in some time zone; it is a
//! derived view and is never persisted.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_START: &str = "09:00";

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

/// An event record as it comes from the bundled data file, the user store,
/// or the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Time of day, `HH:MM`
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(
        rename = "durationMinutes",
        default = "default_duration",
        deserialize_with = "lenient_duration"
    )]
    pub duration_minutes: u32,
}

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    Predefined,
    User,
}

/// A raw event with resolved start and end instants.
///
/// `end > start` always holds.
#[derive(Debug, Clone)]
pub struct MaterializedEvent<Tz: TimeZone> {
    pub raw: RawEvent,
    pub source: EventSource,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> MaterializedEvent<Tz> {
    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn title(&self) -> &str {
        &self.raw.title
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// User input from the creation form, before validation.
///
/// All fields are kept as entered; the store trims and validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCandidate {
    pub title: String,
    pub date: String,
    pub start: String,
    pub duration: String,
}

/// Coerce a user-entered duration: anything that isn't a positive whole
/// number of minutes becomes the 60 minute default.
pub fn coerce_duration(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => u32::try_from(minutes).unwrap_or(u32::MAX),
        _ => DEFAULT_DURATION_MINUTES,
    }
}

/// Accepts numbers or numeric strings; falls back to the default for
/// anything else instead of rejecting the whole record.
fn lenient_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;

    let minutes = match value {
        serde_json::Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(m), _) if m > 0 => u32::try_from(m).unwrap_or(u32::MAX),
            (None, Some(f)) if f >= 1.0 => f.min(u32::MAX as f64) as u32,
            _ => DEFAULT_DURATION_MINUTES,
        },
        serde_json::Value::String(s) => coerce_duration(&s),
        _ => DEFAULT_DURATION_MINUTES,
    };

    Ok(minutes)
}
