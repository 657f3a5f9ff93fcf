//! Resolve raw events into absolute time ranges.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

use crate::event::{DEFAULT_DURATION_MINUTES, EventSource, MaterializedEvent, RawEvent};

const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Normalize an event in the local time zone.
pub fn normalize(raw: &RawEvent, source: EventSource) -> MaterializedEvent<Local> {
    normalize_in(raw, source, &Local)
}

/// Normalize an event in `tz`.
///
/// Never fails: when `date` and `start` don't form a valid local instant, or
/// the end would fall outside the representable range, the event is placed at
/// noon on `date` for one hour.
pub fn normalize_in<Tz: TimeZone>(
    raw: &RawEvent,
    source: EventSource,
    tz: &Tz,
) -> MaterializedEvent<Tz> {
    let minutes = match raw.duration_minutes {
        0 => DEFAULT_DURATION_MINUTES,
        m => m,
    };

    let parsed = parse_start(raw, tz).and_then(|start| {
        let end = add_minutes(&start, minutes)?;
        Some((start, end))
    });

    let (start, end) = match parsed {
        Some(range) => range,
        None => {
            debug!(
                "Could not resolve '{} {}' ({} min) of event '{}', placing it at noon",
                raw.date, raw.start, minutes, raw.title
            );
            fallback_range(&raw.date, tz)
        }
    };

    MaterializedEvent {
        raw: raw.clone(),
        source,
        start,
        end,
    }
}

/// Normalize predefined events followed by user events, preserving each
/// group's order.
pub fn materialize<Tz: TimeZone>(
    predefined: &[RawEvent],
    user: &[RawEvent],
    tz: &Tz,
) -> Vec<MaterializedEvent<Tz>> {
    predefined
        .iter()
        .map(|raw| normalize_in(raw, EventSource::Predefined, tz))
        .chain(user.iter().map(|raw| normalize_in(raw, EventSource::User, tz)))
        .collect()
}

fn parse_start<Tz: TimeZone>(raw: &RawEvent, tz: &Tz) -> Option<DateTime<Tz>> {
    let date = parse_date(&raw.date)?;
    let time = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw.start.trim(), fmt).ok())?;

    // Nonexistent local times (DST gaps) resolve to None and take the fallback.
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn add_minutes<Tz: TimeZone>(start: &DateTime<Tz>, minutes: u32) -> Option<DateTime<Tz>> {
    start
        .clone()
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
}

/// One hour from noon on `date`, or from noon on 1970-01-01 when that hour
/// doesn't fit at the edge of the calendar.
fn fallback_range<Tz: TimeZone>(date: &str, tz: &Tz) -> (DateTime<Tz>, DateTime<Tz>) {
    let start = noon_on(date, tz);
    if let Some(end) = add_minutes(&start, DEFAULT_DURATION_MINUTES) {
        return (start, end);
    }

    let start = noon_on("", tz);
    let end = start.clone() + Duration::minutes(i64::from(DEFAULT_DURATION_MINUTES));
    (start, end)
}

/// Noon on `date`, or on 1970-01-01 when `date` is unreadable.
fn noon_on<Tz: TimeZone>(date: &str, tz: &Tz) -> DateTime<Tz> {
    let day = parse_date(date).unwrap_or_default();
    let noon = NaiveDateTime::new(day, NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());

    tz.from_local_datetime(&noon)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&noon))
}
