//! Read-side rollups that feed the summary panel, trend chart, and calendar cells.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{
    aggregate::{find_entry, month_totals, remaining_planned, year_totals},
    progress::{evaluate_progress, ProgressLabel},
    rag::{daily_status, RagStatus, RagStatusResult},
};
use crate::domain::{
    period::{first_of_month, shift_month},
    DailyEntry, MonthlyTarget,
};

/// Number of months before the current one shown by the trend chart.
pub const TREND_MONTHS_BACK: i32 = 12;

/// Month and year rollup for the month containing a reference date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub month: NaiveDate,
    pub monthly_target: Option<f64>,
    pub monthly_planned: f64,
    pub monthly_actual: f64,
    pub remaining_planned: f64,
    pub progress: ProgressLabel,
    pub monthly: RagStatusResult,
    pub yearly: RagStatusResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub month: NaiveDate,
    pub label: String,
    pub target: f64,
    pub actual: f64,
}

/// Everything the calendar needs to draw one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub target: f64,
    pub actual: f64,
    pub status: RagStatus,
    /// Future days never carry a status colour.
    pub colored: bool,
    pub is_today: bool,
    pub in_focus_month: bool,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(
        entries: &[DailyEntry],
        monthly_target: Option<&MonthlyTarget>,
        reference: NaiveDate,
        today: NaiveDate,
    ) -> PeriodSummary {
        let month = month_totals(reference, entries);
        let year = year_totals(reference, entries);
        let remaining = remaining_planned(reference, today, entries);
        let target_hours = monthly_target.map(|target| target.target_hours);
        let progress = evaluate_progress(
            target_hours.unwrap_or(0.0),
            month.target,
            month.actual,
            remaining,
        );
        PeriodSummary {
            month: first_of_month(reference),
            monthly_target: target_hours,
            monthly_planned: month.target,
            monthly_actual: month.actual,
            remaining_planned: remaining,
            progress,
            monthly: month.status(),
            yearly: year.status(),
        }
    }

    /// Monthly totals from twelve months before `today` through `today`'s month, oldest first.
    pub fn trend(entries: &[DailyEntry], today: NaiveDate) -> Vec<TrendPoint> {
        let current = first_of_month(today);
        (-TREND_MONTHS_BACK..=0)
            .map(|offset| {
                let month = shift_month(current, offset);
                let totals = month_totals(month, entries);
                TrendPoint {
                    month,
                    label: month.format("%b %y").to_string(),
                    target: totals.target,
                    actual: totals.actual,
                }
            })
            .collect()
    }

    pub fn day_cell(
        day: NaiveDate,
        entries: &[DailyEntry],
        today: NaiveDate,
        focus: NaiveDate,
    ) -> DayCell {
        let entry = find_entry(day, entries);
        let RagStatusResult {
            status,
            target,
            actual,
        } = daily_status(entry);
        DayCell {
            date: day,
            target,
            actual,
            status,
            colored: day <= today,
            is_today: day == today,
            in_focus_month: day.year() == focus.year() && day.month() == focus.month(),
        }
    }
}
