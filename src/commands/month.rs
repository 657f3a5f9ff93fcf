use anyhow::Result;
use chrono::NaiveDate;
use monthcal_core::index;
use monthcal_core::layout;
use monthcal_core::month::MonthGrid;
use monthcal_core::storage::KeyValueStore;
use monthcal_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::{cell_text, weekday_header};

pub fn run<S: KeyValueStore>(store: &EventStore<S>, grid: MonthGrid, today: NaiveDate) -> Result<()> {
    let index = index(store.materialize());

    println!("{}", grid.to_string().bold());
    println!("{}", weekday_header(&grid).dimmed());

    for week in grid.weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|&date| {
                let events = index.day(date);
                let text = cell_text(date, events.len(), layout(events).column_count);

                if !grid.contains(date) {
                    text.dimmed().to_string()
                } else if date == today {
                    text.reversed().to_string()
                } else if events.is_empty() {
                    text
                } else {
                    text.cyan().to_string()
                }
            })
            .collect();

        println!("{}", cells.join(" "));
    }

    println!();
    println!("{}", "n = events that day, ! = some of them overlap".dimmed());

    Ok(())
}
