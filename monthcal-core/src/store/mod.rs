//! Owner of predefined and user-created events.
//!
//! Predefined events are loaded once and never change. User events are
//! loaded from a [`KeyValueStore`] when the store opens and written back in
//! full after every creation.

mod create;
mod load;

pub use create::validate;
pub use load::{PredefinedSource, load_predefined, load_user};

use chrono::{Local, TimeZone};

use crate::event::{MaterializedEvent, RawEvent};
use crate::normalize::materialize;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized user events.
pub const USER_EVENTS_KEY: &str = "user-calendar-events";

pub struct EventStore<S: KeyValueStore> {
    predefined: Vec<RawEvent>,
    user: Vec<RawEvent>,
    storage: S,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Take ownership of `predefined` and read user events from `storage`.
    pub fn open(predefined: Vec<RawEvent>, storage: S) -> Self {
        let user = load_user(&storage);

        EventStore {
            predefined,
            user,
            storage,
        }
    }

    pub fn predefined(&self) -> &[RawEvent] {
        &self.predefined
    }

    pub fn user_events(&self) -> &[RawEvent] {
        &self.user
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All events in local time, predefined first.
    pub fn materialize(&self) -> Vec<MaterializedEvent<Local>> {
        self.materialize_in(&Local)
    }

    pub fn materialize_in<Tz: TimeZone>(&self, tz: &Tz) -> Vec<MaterializedEvent<Tz>> {
        materialize(&self.predefined, &self.user, tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCandidate, EventSource};
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn raw(id: &str) -> RawEvent {
        RawEvent {
            id: id.into(),
            title: id.into(),
            date: "2024-05-01".into(),
            start: "09:00".into(),
            duration_minutes: 30,
        }
    }

    #[test]
    fn open_reads_persisted_user_events() {
        let storage = MemoryStore::new().with_value(
            USER_EVENTS_KEY,
            &serde_json::to_string(&vec![raw("u1")]).unwrap(),
        );
        let store = EventStore::open(vec![raw("p1")], storage);

        assert_eq!(store.predefined(), &[raw("p1")]);
        assert_eq!(store.user_events(), &[raw("u1")]);
    }

    #[test]
    fn materialize_merges_sources_in_order() {
        let mut store = EventStore::open(vec![raw("p1"), raw("p2")], MemoryStore::new());
        store
            .create_user_event(&EventCandidate {
                title: "Mine".into(),
                date: "2024-05-01".into(),
                start: "09:00".into(),
                duration: "30".into(),
            })
            .unwrap();

        let events = store.materialize_in(&Utc);
        let sources: Vec<EventSource> = events.iter().map(|e| e.source).collect();
        assert_eq!(
            sources,
            vec![EventSource::Predefined, EventSource::Predefined, EventSource::User]
        );
        assert_eq!(events[2].title(), "Mine");
    }

    #[test]
    fn predefined_events_are_not_persisted() {
        let mut store = EventStore::open(vec![raw("p1")], MemoryStore::new());
        store
            .create_user_event(&EventCandidate {
                title: "Mine".into(),
                date: "2024-05-01".into(),
                start: "10:00".into(),
                duration: String::new(),
            })
            .unwrap();

        let persisted = load_user(store.storage());
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].title, "Mine");
    }
}
