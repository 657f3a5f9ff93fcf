//! Validation and creation of user events.

use tracing::{info, warn};
use uuid::Uuid;

use super::{EventStore, USER_EVENTS_KEY};
use crate::error::{CalResult, ValidationError};
use crate::event::{EventCandidate, RawEvent, coerce_duration};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> EventStore<S> {
    /// Validate `candidate`, add it to the user events and persist them.
    ///
    /// The event is kept in memory even when persisting fails; the failure
    /// is only logged.
    pub fn create_user_event(
        &mut self,
        candidate: &EventCandidate,
    ) -> Result<RawEvent, ValidationError> {
        let mut event = validate(candidate)?;
        event.id = Uuid::now_v7().to_string();

        self.user.push(event.clone());
        info!("Created event '{}' on {} {}", event.title, event.date, event.start);

        if let Err(e) = self.persist() {
            warn!("Could not persist user events: {e}");
        }

        Ok(event)
    }

    fn persist(&mut self) -> CalResult<()> {
        let content = serde_json::to_string(&self.user)?;
        self.storage.set(USER_EVENTS_KEY, &content)
    }
}

/// Check the form fields in order (title, date, start) and build an event
/// without an id. Duration is coerced, never rejected.
pub fn validate(candidate: &EventCandidate) -> Result<RawEvent, ValidationError> {
    let title = candidate.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let date = candidate.date.trim();
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }

    let start = candidate.start.trim();
    if start.is_empty() {
        return Err(ValidationError::MissingStartTime);
    }

    Ok(RawEvent {
        id: String::new(),
        title: title.to_string(),
        date: date.to_string(),
        start: start.to_string(),
        duration_minutes: coerce_duration(&candidate.duration),
    })
}
