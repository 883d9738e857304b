//! Calendar period arithmetic: month/year boundaries and inclusive date windows.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` range of calendar days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end < start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// The calendar month containing `reference`.
    pub fn month_of(reference: NaiveDate) -> Self {
        Self {
            start: first_of_month(reference),
            end: last_of_month(reference),
        }
    }

    /// The calendar year containing `reference`.
    pub fn year_of(reference: NaiveDate) -> Self {
        Self {
            start: first_of_year(reference),
            end: last_of_year(reference),
        }
    }

    /// The Sunday-to-Saturday week containing `reference`.
    pub fn week_of(reference: NaiveDate) -> Self {
        let offset = reference.weekday().num_days_from_sunday() as i64;
        let start = reference - Duration::days(offset);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Iterates every day in the window, both ends included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Errors that can occur when constructing [`DateWindow`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindowError {
    InvalidRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must not precede start"),
        }
    }
}

impl std::error::Error for DateWindowError {}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let days = days_in_month(date.year(), date.month());
    date.with_day(days).unwrap_or(date)
}

pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

pub fn last_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// Moves `date` by `months`, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_window_covers_leap_february() {
        let window = DateWindow::month_of(date(2024, 2, 10));
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 2, 29));
        assert_eq!(window.days().count(), 29);
    }

    #[test]
    fn year_window_counts_every_day() {
        assert_eq!(DateWindow::year_of(date(2023, 6, 1)).days().count(), 365);
        assert_eq!(DateWindow::year_of(date(2024, 6, 1)).days().count(), 366);
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2025-01-15 is a Wednesday.
        let week = DateWindow::week_of(date(2025, 1, 15));
        assert_eq!(week.start, date(2025, 1, 12));
        assert_eq!(week.end, date(2025, 1, 18));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = DateWindow::new(date(2025, 1, 2), date(2025, 1, 1)).unwrap_err();
        assert_eq!(err, DateWindowError::InvalidRange);
    }

    #[test]
    fn shift_month_clamps_and_wraps_years() {
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2025, 1, 15), -1), date(2024, 12, 15));
        assert_eq!(shift_month(date(2024, 11, 30), -12), date(2023, 11, 30));
    }
}
