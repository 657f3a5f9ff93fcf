//! Terminal rendering for monthcal-core types.
//!
//! Extension traits adding colored output with owo_colors.

use chrono::{Local, NaiveDate};
use monthcal_core::layout::Placement;
use monthcal_core::month::MonthGrid;
use monthcal_core::{EventSource, MaterializedEvent};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventSource {
    fn render(&self) -> String {
        match self {
            EventSource::Predefined => "[predefined]".dimmed().to_string(),
            EventSource::User => "[mine]".cyan().to_string(),
        }
    }
}

impl Render for MaterializedEvent<Local> {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            time_range(self).dimmed(),
            self.title(),
            self.source.render()
        )
    }
}

/// A day-view line: the event plus its lane when the day has more than one.
pub fn render_placement(placement: &Placement<'_, Local>, column_count: usize) -> String {
    let lanes = if column_count > 1 {
        // One marker per column, the event's own column filled.
        (0..column_count)
            .map(|c| if c == placement.column { '█' } else { '·' })
            .collect::<String>()
    } else {
        String::new()
    };

    format!("  {} {}", lanes.yellow(), placement.event.render())
}

/// `HH:MM-HH:MM`, with the end date added when it is a different day.
pub fn time_range(event: &MaterializedEvent<Local>) -> String {
    let start = event.start.format("%H:%M");
    if event.end.date_naive() == event.start.date_naive() {
        format!("{}-{}", start, event.end.format("%H:%M"))
    } else {
        format!("{}-{}", start, event.end.format("%a %H:%M"))
    }
}

/// "Today", "Tomorrow" or e.g. "Wed May 1 2024"
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Width of a month cell, without ANSI codes.
pub const CELL_WIDTH: usize = 6;

/// Plain text of a month cell: day number, then the event count with a `!`
/// when some of that day's events overlap.
pub fn cell_text(date: NaiveDate, event_count: usize, column_count: usize) -> String {
    let marker = match (event_count, column_count) {
        (0, _) => String::new(),
        (n, c) if c > 1 => format!("{n}!"),
        (n, _) => n.to_string(),
    };
    format!("{:>2} {:<3}", date.format("%-d"), marker)
}

pub fn weekday_header(grid: &MonthGrid) -> String {
    grid.weekdays()
        .iter()
        .map(|day| format!("{:<width$}", &day.to_string()[..2], width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}
