use anyhow::Result;
use monthcal_core::EventCandidate;
use monthcal_core::storage::KeyValueStore;
use monthcal_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(store: &mut EventStore<S>, candidate: &EventCandidate) -> Result<()> {
    let event = store.create_user_event(candidate)?;

    println!(
        "{}",
        format!(
            "  Created: {} on {} at {} ({} min)",
            event.title, event.date, event.start, event.duration_minutes
        )
        .green()
    );

    Ok(())
}
