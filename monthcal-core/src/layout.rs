//! Column packing of a day's overlapping events.
//!
//! Events are placed greedily in start order: each goes into the leftmost
//! column whose last event has already ended, or into a new column when
//! every column is still busy. For start-sorted input the number of
//! columns equals the peak number of simultaneously running events.

use chrono::TimeZone;

use crate::event::MaterializedEvent;

/// One event and the column it was placed in.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a, Tz: TimeZone> {
    pub event: &'a MaterializedEvent<Tz>,
    pub column: usize,
}

/// Column assignment for a single day.
#[derive(Debug, Clone)]
pub struct DayLayout<'a, Tz: TimeZone> {
    /// In input order.
    pub placements: Vec<Placement<'a, Tz>>,
    pub column_count: usize,
}

/// Assign columns to `events`, which must be sorted by start (as the day
/// buckets of [`crate::index::DayIndex`] are).
///
/// Touching events (`a.end == b.start`) may share a column.
pub fn layout<Tz: TimeZone>(events: &[MaterializedEvent<Tz>]) -> DayLayout<'_, Tz> {
    // Only the most recently placed event of each column matters.
    let mut column_tails: Vec<&MaterializedEvent<Tz>> = Vec::new();
    let mut placements = Vec::with_capacity(events.len());

    for event in events {
        let free = column_tails
            .iter()
            .position(|tail| tail.end <= event.start);

        let column = match free {
            Some(column) => {
                column_tails[column] = event;
                column
            }
            None => {
                column_tails.push(event);
                column_tails.len() - 1
            }
        };

        placements.push(Placement { event, column });
    }

    DayLayout {
        placements,
        column_count: column_tails.len(),
    }
}

impl<'a, Tz: TimeZone> DayLayout<'a, Tz> {
    /// Column of the event with `id`, if it is part of this day.
    pub fn column_of(&self, id: &str) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.event.id() == id)
            .map(|p| p.column)
    }

    /// Events grouped per column, each column in start order.
    pub fn columns(&self) -> Vec<Vec<&'a MaterializedEvent<Tz>>> {
        let mut columns = vec![Vec::new(); self.column_count];
        for placement in &self.placements {
            columns[placement.column].push(placement.event);
        }
        columns
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventSource, RawEvent};
    use crate::index::index;
    use crate::normalize::{materialize, normalize_in};
    use chrono::{NaiveDate, Utc};

    fn raw(id: &str, start: &str, duration: u32) -> RawEvent {
        RawEvent {
            id: id.into(),
            title: id.to_uppercase(),
            date: "2024-05-01".into(),
            start: start.into(),
            duration_minutes: duration,
        }
    }

    fn day(raws: &[RawEvent]) -> Vec<MaterializedEvent<Utc>> {
        let index = index(materialize(raws, &[], &Utc));
        index
            .day(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .to_vec()
    }

    fn columns_by_id(layout: &DayLayout<'_, Utc>) -> Vec<(String, usize)> {
        layout
            .placements
            .iter()
            .map(|p| (p.event.id().to_string(), p.column))
            .collect()
    }

    /// Peak number of events running at the same instant.
    fn max_overlap(events: &[MaterializedEvent<Utc>]) -> usize {
        let mut points: Vec<(chrono::DateTime<Utc>, i32)> = events
            .iter()
            .flat_map(|e| [(e.start, 1), (e.end, -1)])
            .collect();
        // Ends sort before starts at the same instant.
        points.sort();

        let mut running = 0;
        let mut peak = 0;
        for (_, delta) in points {
            running += delta;
            peak = peak.max(running);
        }
        peak as usize
    }

    #[test]
    fn empty_day() {
        let layout = layout::<Utc>(&[]);
        assert!(layout.is_empty());
        assert_eq!(layout.column_count, 0);
    }

    #[test]
    fn single_event() {
        let events = day(&[raw("a", "09:00", 60)]);
        let layout = layout(&events);
        assert_eq!(columns_by_id(&layout), vec![("a".into(), 0)]);
        assert_eq!(layout.column_count, 1);
    }

    #[test]
    fn overlap_then_reuse_of_first_column() {
        let events = day(&[raw("a", "09:00", 60), raw("b", "09:30", 30), raw("c", "10:00", 30)]);
        let layout = layout(&events);

        assert_eq!(layout.column_of("a"), Some(0));
        assert_eq!(layout.column_of("b"), Some(1));
        assert_eq!(layout.column_of("c"), Some(0));
        assert_eq!(layout.column_count, 2);
    }

    #[test]
    fn all_overlapping_get_own_columns() {
        let events = day(&[
            raw("a", "09:00", 120),
            raw("b", "09:10", 120),
            raw("c", "09:20", 120),
            raw("d", "09:30", 120),
        ]);
        let layout = layout(&events);

        let columns: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3]);
        assert_eq!(layout.column_count, 4);
    }

    #[test]
    fn back_to_back_events_share_a_column() {
        let events = day(&[raw("a", "09:00", 60), raw("b", "10:00", 60), raw("c", "11:00", 60)]);
        let layout = layout(&events);
        assert!(layout.placements.iter().all(|p| p.column == 0));
        assert_eq!(layout.column_count, 1);
    }

    #[test]
    fn prefers_leftmost_free_column() {
        // c reuses b's column; d starts exactly when a ends and takes column 0.
        let events = day(&[
            raw("a", "09:00", 60),
            raw("b", "09:15", 30),
            raw("c", "09:50", 60),
            raw("d", "10:00", 30),
        ]);
        let layout = layout(&events);

        assert_eq!(layout.column_of("a"), Some(0));
        assert_eq!(layout.column_of("b"), Some(1));
        assert_eq!(layout.column_of("c"), Some(1));
        assert_eq!(layout.column_of("d"), Some(0));
        assert_eq!(layout.column_count, 2);
    }

    #[test]
    fn columns_groups_events_per_lane() {
        let events = day(&[raw("a", "09:00", 60), raw("b", "09:30", 30), raw("c", "10:00", 30)]);
        let layout = layout(&events);

        let lanes: Vec<Vec<&str>> = layout
            .columns()
            .iter()
            .map(|lane| lane.iter().map(|e| e.id()).collect())
            .collect();
        assert_eq!(lanes, vec![vec!["a", "c"], vec!["b"]]);
    }

    #[test]
    fn unknown_id_has_no_column() {
        let events = day(&[raw("a", "09:00", 60)]);
        assert_eq!(layout(&events).column_of("zzz"), None);
    }

    #[test]
    fn column_count_matches_peak_overlap_and_lanes_never_overlap() {
        // Deterministic pseudo-random days.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = |bound: u64| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed % bound
        };

        for _ in 0..50 {
            let count = 1 + next(12) as usize;
            let raws: Vec<RawEvent> = (0..count)
                .map(|i| {
                    let minute_of_day = next(20 * 60);
                    raw(
                        &format!("e{i}"),
                        &format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60),
                        1 + next(180) as u32,
                    )
                })
                .collect();

            let events = day(&raws);
            let layout = layout(&events);

            assert_eq!(layout.column_count, max_overlap(&events));

            for lane in layout.columns() {
                for pair in lane.windows(2) {
                    assert!(!pair[0].overlaps(pair[1]));
                    assert!(pair[0].end <= pair[1].start);
                }
            }
        }
    }

    #[test]
    fn deterministic_for_identical_input() {
        let events = day(&[
            raw("a", "09:00", 90),
            raw("b", "09:00", 30),
            raw("c", "09:30", 30),
            raw("d", "10:00", 15),
        ]);
        assert_eq!(columns_by_id(&layout(&events)), columns_by_id(&layout(&events)));
    }

    #[test]
    fn zero_length_events_may_share() {
        // Built by hand: normalization never produces zero-length events.
        let base = normalize_in(&raw("a", "09:00", 60), EventSource::User, &Utc);
        let mut a = base.clone();
        a.end = a.start;
        let mut b = base;
        b.raw.id = "b".into();
        b.end = b.start;

        let events = vec![a, b];
        let layout = layout(&events);
        assert_eq!(layout.column_count, 1);
    }
}
