//! Startup loading of predefined and user events.

use std::path::PathBuf;

use tracing::warn;

use super::USER_EVENTS_KEY;
use crate::event::RawEvent;
use crate::storage::KeyValueStore;

const BUNDLED_EVENTS: &str = include_str!("../../data/predefined_events.json");

/// Where predefined events are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PredefinedSource {
    /// The data file compiled into the library.
    #[default]
    Bundled,
    /// A JSON file on disk with the same schema.
    File(PathBuf),
}

/// Load the read-only predefined events.
///
/// A missing or malformed source yields no events.
pub fn load_predefined(source: &PredefinedSource) -> Vec<RawEvent> {
    match source {
        PredefinedSource::Bundled => parse_events(BUNDLED_EVENTS, "bundled events"),
        PredefinedSource::File(path) => match std::fs::read_to_string(path) {
            Ok(content) => parse_events(&content, &path.display().to_string()),
            Err(e) => {
                warn!("Could not read predefined events from {}: {e}", path.display());
                Vec::new()
            }
        },
    }
}

/// Load the persisted user events.
///
/// Absent, unreadable, or corrupt data yields no events.
pub fn load_user<S: KeyValueStore>(storage: &S) -> Vec<RawEvent> {
    match storage.get(USER_EVENTS_KEY) {
        Ok(Some(content)) => parse_events(&content, USER_EVENTS_KEY),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Could not read user events: {e}");
            Vec::new()
        }
    }
}

fn parse_events(content: &str, origin: &str) -> Vec<RawEvent> {
    serde_json::from_str(content).unwrap_or_else(|e| {
        warn!("Ignoring malformed events in {origin}: {e}");
        Vec::new()
    })
}
