//! The visible day grid of a month view.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Whole weeks covering one month: the first row starts on `week_start` on
/// or before the 1st, the last row ends on or after the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first_of_month: NaiveDate,
    week_start: Weekday,
}

impl MonthGrid {
    /// `None` for an invalid year/month.
    pub fn new(year: i32, month: u32, week_start: Weekday) -> Option<Self> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(MonthGrid {
            first_of_month,
            week_start,
        })
    }

    /// The grid of the month containing `date`.
    pub fn containing(date: NaiveDate, week_start: Weekday) -> Self {
        MonthGrid {
            first_of_month: date.with_day(1).unwrap_or(date),
            week_start,
        }
    }

    pub fn year(&self) -> i32 {
        self.first_of_month.year()
    }

    pub fn month(&self) -> u32 {
        self.first_of_month.month()
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_of_month
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_of_month.pred_opt().unwrap_or(self.first_of_month)
    }

    /// Whether `date` is in the viewed month (as opposed to the leading or
    /// trailing days of neighbouring months).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// First and last visible dates.
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        let first = self
            .first_of_month
            .week(self.week_start)
            .first_day();
        let last = self.last_day().week(self.week_start).last_day();
        (first, last)
    }

    /// Rows of seven consecutive dates.
    pub fn weeks(&self) -> Vec<[NaiveDate; 7]> {
        let (first, last) = self.range();

        first
            .iter_weeks()
            .take_while(|row_start| *row_start <= last)
            .map(|row_start| {
                let mut row = [row_start; 7];
                for (offset, day) in row.iter_mut().enumerate() {
                    *day = row_start + Days::new(offset as u64);
                }
                row
            })
            .collect()
    }

    /// Weekdays in column order.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.week_start; 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    pub fn next(&self) -> Self {
        self.shifted(|d| d.checked_add_months(Months::new(1)))
    }

    pub fn previous(&self) -> Self {
        self.shifted(|d| d.checked_sub_months(Months::new(1)))
    }

    fn shifted(&self, shift: impl Fn(NaiveDate) -> Option<NaiveDate>) -> Self {
        MonthGrid {
            first_of_month: shift(self.first_of_month).unwrap_or(self.first_of_month),
            week_start: self.week_start,
        }
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first_of_month.format("%B %Y"))
    }
}
