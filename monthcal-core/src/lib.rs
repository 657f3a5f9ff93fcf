//! Core of the monthcal month-view calendar.
//!
//! Raw events flow through a fixed pipeline:
//! - [`normalize()`] resolves each record to an absolute start/end
//! - [`index()`] buckets the results per local day, sorted by start
//! - [`layout()`] packs a day's overlapping events into columns
//!
//! [`store::EventStore`] owns the predefined and user-created records and
//! persists user events through a [`storage::KeyValueStore`].

pub mod config;
pub mod error;
pub mod event;
pub mod index;
pub mod layout;
pub mod month;
pub mod normalize;
pub mod storage;
pub mod store;

pub use event::{EventCandidate, EventSource, MaterializedEvent, RawEvent};
pub use index::{DayIndex, index};
pub use layout::{DayLayout, Placement, layout};
pub use normalize::{materialize, normalize, normalize_in};
