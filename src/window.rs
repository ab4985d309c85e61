//! Calendar-month partitioning of the scanned history range.
//!
//! The match ids endpoint returns one bounded page per call and wants explicit
//! time bounds, so exhaustive retrieval walks the range one month at a time. A
//! month keeps each window's result count well under the page cap for a
//! typical player.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

use crate::error::AppError;

/// A year and month, as given on the command line (`2021-01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("day 1 of a valid month")
    }

    fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month
            .parse()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(invalid)?;

        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One calendar month: [1st of the month, 1st of the next month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthWindow {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Window start as unix seconds, UTC midnight.
    pub fn start_ts(&self) -> i64 {
        unix_midnight(self.start)
    }

    /// Exclusive window end as unix seconds, UTC midnight.
    pub fn end_ts(&self) -> i64 {
        unix_midnight(self.end)
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Partition `[from, until)` into consecutive calendar-month windows.
pub fn month_windows(from: YearMonth, until: YearMonth) -> Vec<MonthWindow> {
    let mut windows = Vec::new();
    let mut cursor = from;

    while cursor < until {
        let next = cursor.next();
        windows.push(MonthWindow {
            start: cursor.first_day(),
            end: next.first_day(),
        });
        cursor = next;
    }

    windows
}
