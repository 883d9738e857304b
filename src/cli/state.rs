use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::{
    core::{
        aggregate::find_entry,
        errors::Result,
        services::{EntryService, PeriodSummary, SummaryService, TrendPoint},
    },
    domain::{period::shift_month, DailyEntry, MonthlyTarget, Session},
    storage::EntryStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "month" => Some(CalendarView::Month),
            "week" => Some(CalendarView::Week),
            "day" => Some(CalendarView::Day),
            _ => None,
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        };
        f.write_str(label)
    }
}

/// Session-scoped calendar state: loaded rows, current view, and focus date.
///
/// Entries and the monthly target are reloaded from the store after every
/// write; the derived summary is always computed from the cached rows.
#[derive(Debug, Clone)]
pub struct CalendarState {
    session: Session,
    pub entries: Vec<DailyEntry>,
    pub monthly_target: Option<MonthlyTarget>,
    pub selected_date: Option<NaiveDate>,
    pub view: CalendarView,
    pub cursor: NaiveDate,
}

impl CalendarState {
    pub fn new(session: Session, today: NaiveDate) -> Self {
        Self {
            session,
            entries: Vec::new(),
            monthly_target: None,
            selected_date: None,
            view: CalendarView::Month,
            cursor: today,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reloads entries and the current month's target.
    ///
    /// A failed read leaves the previously cached value in place.
    pub fn refresh(&mut self, store: &dyn EntryStore, today: NaiveDate) -> Result<()> {
        let entries = EntryService::list(store, &self.session);
        let target = store.monthly_target(&self.session, today);

        if let Ok(entries) = &entries {
            self.entries = entries.clone();
        }
        if let Ok(target) = &target {
            self.monthly_target = target.clone();
        }
        tracing::debug!(entries = self.entries.len(), "calendar state refreshed");

        entries?;
        target?;
        Ok(())
    }

    /// Moves the cursor by `steps` units of the active view.
    pub fn navigate(&mut self, steps: i32) {
        self.cursor = match self.view {
            CalendarView::Month => shift_month(self.cursor, steps),
            CalendarView::Week => self.cursor + Duration::days(7 * i64::from(steps)),
            CalendarView::Day => self.cursor + Duration::days(i64::from(steps)),
        };
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.cursor = date;
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected_date == Some(date)
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&DailyEntry> {
        find_entry(date, &self.entries)
    }

    /// Summary for the month containing `today`.
    pub fn summary(&self, today: NaiveDate) -> PeriodSummary {
        SummaryService::summarize(&self.entries, self.monthly_target.as_ref(), today, today)
    }

    pub fn trend(&self, today: NaiveDate) -> Vec<TrendPoint> {
        SummaryService::trend(&self.entries, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn navigation_steps_follow_the_view() {
        let mut state = CalendarState::new(Session::new(Uuid::nil()), date(2025, 1, 31));
        state.navigate(1);
        assert_eq!(state.cursor, date(2025, 2, 28));

        state.set_view(CalendarView::Week);
        state.navigate(-1);
        assert_eq!(state.cursor, date(2025, 2, 21));

        state.set_view(CalendarView::Day);
        state.navigate(2);
        assert_eq!(state.cursor, date(2025, 2, 23));
    }

    #[test]
    fn select_moves_the_cursor_and_remembers_the_day() {
        let mut state = CalendarState::new(Session::new(Uuid::nil()), date(2025, 3, 10));
        assert!(!state.is_selected(date(2025, 3, 10)));

        state.select(date(2025, 3, 20));
        assert_eq!(state.cursor, date(2025, 3, 20));
        assert!(state.is_selected(date(2025, 3, 20)));

        state.jump_to(date(2025, 4, 1));
        assert!(state.is_selected(date(2025, 3, 20)));
    }

    #[test]
    fn summary_tracks_the_day_it_is_asked_about() {
        let temp = TempDir::new().unwrap();
        let store = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        let session = Session::new(Uuid::new_v4());
        store
            .insert_entry(&session, DailyEntry::new(session.user_id, date(2025, 3, 20), 8.0, 0.0))
            .unwrap();
        let mut state = CalendarState::new(session, date(2025, 3, 10));
        state.refresh(&store, date(2025, 3, 10)).unwrap();

        assert_eq!(state.summary(date(2025, 3, 10)).remaining_planned, 8.0);
        assert_eq!(state.summary(date(2025, 3, 25)).remaining_planned, 0.0);
    }

    #[test]
    fn view_names_parse_case_insensitively() {
        assert_eq!(CalendarView::parse("Week"), Some(CalendarView::Week));
        assert_eq!(CalendarView::parse("year"), None);
    }
}
