//! Per-day buckets of materialized events.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, TimeZone};

use crate::event::MaterializedEvent;

/// Events grouped by the local date of their start instant, each day sorted
/// by start.
#[derive(Debug, Clone)]
pub struct DayIndex<Tz: TimeZone> {
    days: BTreeMap<NaiveDate, Vec<MaterializedEvent<Tz>>>,
}

/// Build the day index.
///
/// The key comes from `start`, not from the raw `date` field: the two differ
/// for events that went through the noon fallback with an unreadable date.
/// Events with equal starts keep their input order.
pub fn index<Tz: TimeZone>(events: impl IntoIterator<Item = MaterializedEvent<Tz>>) -> DayIndex<Tz> {
    let mut days: BTreeMap<NaiveDate, Vec<MaterializedEvent<Tz>>> = BTreeMap::new();

    for event in events {
        days.entry(event.start.date_naive()).or_default().push(event);
    }

    for bucket in days.values_mut() {
        // sort_by is stable
        bucket.sort_by(|a, b| a.start.cmp(&b.start));
    }

    DayIndex { days }
}

impl<Tz: TimeZone> DayIndex<Tz> {
    /// Events starting on `date`, sorted by start. Empty when there are none.
    pub fn day(&self, date: NaiveDate) -> &[MaterializedEvent<Tz>] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All non-empty days in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[MaterializedEvent<Tz>])> {
        self.days.iter().map(|(date, events)| (*date, events.as_slice()))
    }

    /// Non-empty days within `range`, in date order. A reversed range is empty.
    pub fn days_in(
        &self,
        range: RangeInclusive<NaiveDate>,
    ) -> impl Iterator<Item = (NaiveDate, &[MaterializedEvent<Tz>])> {
        let days = (range.start() <= range.end()).then(|| self.days.range(range));

        days.into_iter()
            .flatten()
            .map(|(date, events)| (*date, events.as_slice()))
    }

    /// Number of non-empty days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
