//! Day-by-day summation of target and actual hours over calendar periods.

use std::ops::Add;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{period, DailyEntry, DateWindow};

use super::rag::{classify, RagStatusResult};

/// Summed hours for a period.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct HourTotals {
    pub target: f64,
    pub actual: f64,
}

impl HourTotals {
    pub fn new(target: f64, actual: f64) -> Self {
        Self { target, actual }
    }

    pub fn status(&self) -> RagStatusResult {
        classify(self.target, self.actual)
    }
}

impl Add for HourTotals {
    type Output = HourTotals;

    fn add(self, rhs: HourTotals) -> HourTotals {
        HourTotals {
            target: self.target + rhs.target,
            actual: self.actual + rhs.actual,
        }
    }
}

/// Returns the first entry recorded for `day`.
///
/// At most one entry per day is expected; when that does not hold the first
/// match in slice order wins.
pub fn find_entry(day: NaiveDate, entries: &[DailyEntry]) -> Option<&DailyEntry> {
    entries.iter().find(|entry| entry.entry_date == day)
}

/// Sums hours for every day in `[period_start, period_end]`.
///
/// Days without an entry contribute zero; an inverted range sums to zero.
pub fn aggregate(
    period_start: NaiveDate,
    period_end: NaiveDate,
    entries: &[DailyEntry],
) -> HourTotals {
    match DateWindow::new(period_start, period_end) {
        Ok(window) => aggregate_window(&window, entries),
        Err(_) => HourTotals::default(),
    }
}

pub fn aggregate_window(window: &DateWindow, entries: &[DailyEntry]) -> HourTotals {
    window
        .days()
        .filter_map(|day| find_entry(day, entries))
        .fold(HourTotals::default(), |totals, entry| {
            totals + HourTotals::new(entry.target_hours, entry.actual_hours)
        })
}

pub fn month_totals(reference: NaiveDate, entries: &[DailyEntry]) -> HourTotals {
    aggregate_window(&DateWindow::month_of(reference), entries)
}

pub fn year_totals(reference: NaiveDate, entries: &[DailyEntry]) -> HourTotals {
    aggregate_window(&DateWindow::year_of(reference), entries)
}

/// Target hours still scheduled in `reference`'s month on days strictly after `today`.
pub fn remaining_planned(reference: NaiveDate, today: NaiveDate, entries: &[DailyEntry]) -> f64 {
    let month_end = period::last_of_month(reference);
    let month_start = period::first_of_month(reference);
    let Some(tomorrow) = today.succ_opt() else {
        return 0.0;
    };
    let start = tomorrow.max(month_start);
    aggregate(start, month_end, entries).target
}
