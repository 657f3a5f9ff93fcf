use anyhow::Result;
use chrono::{Local, NaiveDate};
use monthcal_core::storage::KeyValueStore;
use monthcal_core::store::EventStore;
use monthcal_core::{DayLayout, EventSource, index, layout};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::{date_label, render_placement};

/// Machine-readable form of a day's layout.
#[derive(Serialize)]
struct DayJson<'a> {
    date: NaiveDate,
    column_count: usize,
    events: Vec<PlacedEventJson<'a>>,
}

#[derive(Serialize)]
struct PlacedEventJson<'a> {
    id: &'a str,
    title: &'a str,
    source: EventSource,
    start: String,
    end: String,
    column: usize,
}

pub fn run<S: KeyValueStore>(store: &EventStore<S>, date: NaiveDate, json: bool) -> Result<()> {
    let index = index(store.materialize());
    let day_layout = layout(index.day(date));

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(date, &day_layout))?);
        return Ok(());
    }

    println!("{}", date_label(date, Local::now().date_naive()).bold());

    if day_layout.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for placement in &day_layout.placements {
        println!("{}", render_placement(placement, day_layout.column_count));
    }

    Ok(())
}

fn to_json<'a>(date: NaiveDate, day_layout: &DayLayout<'a, Local>) -> DayJson<'a> {
    DayJson {
        date,
        column_count: day_layout.column_count,
        events: day_layout
            .placements
            .iter()
            .map(|placement| {
                let event = placement.event;
                PlacedEventJson {
                    id: event.id(),
                    title: event.title(),
                    source: event.source,
                    start: event.start.to_rfc3339(),
                    end: event.end.to_rfc3339(),
                    column: placement.column,
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthcal_core::RawEvent;
    use monthcal_core::normalize::materialize;

    fn raw(id: &str, start: &str, duration: u32) -> RawEvent {
        RawEvent {
            id: id.into(),
            title: id.into(),
            date: "2024-05-01".into(),
            start: start.into(),
            duration_minutes: duration,
        }
    }

    #[test]
    fn json_carries_columns() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let events = materialize(
            &[raw("a", "09:00", 60), raw("b", "09:30", 30)],
            &[raw("c", "10:00", 30)],
            &Local,
        );
        let index = index(events);
        let day_layout = layout(index.day(date));

        let value = serde_json::to_value(to_json(date, &day_layout)).unwrap();
        assert_eq!(value["date"], "2024-05-01");
        assert_eq!(value["column_count"], 2);
        assert_eq!(value["events"][1]["column"], 1);
        assert_eq!(value["events"][2]["source"], "user");
        assert_eq!(value["events"][2]["column"], 0);
    }
}
