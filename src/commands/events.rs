use anyhow::Result;
use chrono::NaiveDate;
use monthcal_core::index;
use monthcal_core::storage::KeyValueStore;
use monthcal_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::{Render, date_label};

pub fn run<S: KeyValueStore>(
    store: &EventStore<S>,
    from: NaiveDate,
    to: NaiveDate,
    today: NaiveDate,
) -> Result<()> {
    if from > to {
        anyhow::bail!("--from ({from}) is after --to ({to})");
    }

    let index = index(store.materialize());
    let mut printed_any = false;

    for (date, events) in index.days_in(from..=to) {
        if printed_any {
            println!();
        }
        println!("{}", date_label(date, today).bold());

        for event in events {
            println!("  {}", event.render());
        }
        printed_any = true;
    }

    if !printed_any {
        println!("{}", "No events found".dimmed());
    }

    Ok(())
}
