//! Text rendering of the month, week, and day calendar views.

use chrono::{Datelike, NaiveDate};
use colored::Colorize;

use crate::cli::output::OutputPreferences;
use crate::cli::state::{CalendarState, CalendarView};
use crate::core::services::{DayCell, SummaryService};
use crate::core::RagStatus;
use crate::domain::period::{first_of_month, last_of_month};
use crate::domain::DateWindow;

use super::style::{hours, status_tag, status_word};

const CELL_WIDTH: usize = 9;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn title(state: &CalendarState) -> String {
    match state.view {
        CalendarView::Month => state.cursor.format("%B %Y").to_string(),
        CalendarView::Week => {
            let week = DateWindow::week_of(state.cursor);
            format!("Week of {}", week.start.format("%b %d, %Y"))
        }
        CalendarView::Day => state.cursor.format("%A, %B %-d, %Y").to_string(),
    }
}

pub fn render(state: &CalendarState, today: NaiveDate, prefs: &OutputPreferences) -> String {
    match state.view {
        CalendarView::Month => render_month(state, today, prefs),
        CalendarView::Week => render_week(state, today, prefs),
        CalendarView::Day => render_day(state, today, prefs),
    }
}

/// Sunday-first grid covering every week that touches the cursor's month.
pub fn render_month(state: &CalendarState, today: NaiveDate, prefs: &OutputPreferences) -> String {
    let first = DateWindow::week_of(first_of_month(state.cursor)).start;
    let last = DateWindow::week_of(last_of_month(state.cursor)).end;
    let grid = DateWindow { start: first, end: last };

    let mut lines = vec![WEEKDAYS
        .iter()
        .map(|name| format!("{:<width$}", name, width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")];

    let days: Vec<NaiveDate> = grid.days().collect();
    for week in days.chunks(7) {
        let cells: Vec<DayCell> = week
            .iter()
            .map(|day| SummaryService::day_cell(*day, &state.entries, today, state.cursor))
            .collect();
        let mut top = Vec::with_capacity(7);
        let mut bottom = Vec::with_capacity(7);
        for cell in &cells {
            let selected = state.is_selected(cell.date);
            let (first_line, second_line) = cell_lines(cell, selected, prefs);
            top.push(paint_cell(&first_line, cell, prefs));
            bottom.push(paint_cell(&second_line, cell, prefs));
        }
        lines.push(top.join(" "));
        lines.push(bottom.join(" "));
    }
    lines.push(legend(prefs));
    lines.join("\n")
}

pub fn render_week(state: &CalendarState, today: NaiveDate, prefs: &OutputPreferences) -> String {
    let week = DateWindow::week_of(state.cursor);
    let mut lines: Vec<String> = week
        .days()
        .map(|day| {
            let cell = SummaryService::day_cell(day, &state.entries, today, day);
            let marker = markers(&cell, state.is_selected(day));
            let status = if cell.colored {
                status_word(cell.status, prefs)
            } else {
                "-".to_string()
            };
            let text = format!(
                "{} {:<2} target {:>5}h  actual {:>5}h",
                day.format("%a %m/%d"),
                marker,
                hours(cell.target),
                hours(cell.actual)
            );
            format!("{}  {}", paint_cell(&text, &cell, prefs), status)
        })
        .collect();
    lines.push(legend(prefs));
    lines.join("\n")
}

pub fn render_day(state: &CalendarState, today: NaiveDate, prefs: &OutputPreferences) -> String {
    let day = state.cursor;
    let cell = SummaryService::day_cell(day, &state.entries, today, day);
    let mut lines = Vec::new();
    match state.entry_for(day) {
        Some(entry) => {
            lines.push(format!("  Target hours : {}", hours(entry.target_hours)));
            lines.push(format!("  Actual hours : {}", hours(entry.actual_hours)));
        }
        None => lines.push("  No entry recorded.".to_string()),
    }
    let status = if cell.colored {
        status_word(cell.status, prefs)
    } else {
        "not yet due".to_string()
    };
    lines.push(format!("  Status       : {}", status));
    if cell.is_today {
        lines.push("  (today)".to_string());
    }
    lines.join("\n")
}

fn markers(cell: &DayCell, selected: bool) -> String {
    let mut marker = String::new();
    if cell.is_today {
        marker.push('*');
    }
    if selected {
        marker.push('#');
    }
    marker
}

fn cell_lines(cell: &DayCell, selected: bool, prefs: &OutputPreferences) -> (String, String) {
    let marker = markers(cell, selected);
    let tag = if prefs.plain() && cell.colored {
        format!(" {}", status_tag(cell.status))
    } else {
        String::new()
    };
    let first = format!("{:>2}{}{}", cell.date.day(), marker, tag);
    let second = if cell.target == 0.0 && cell.actual == 0.0 {
        String::new()
    } else {
        format!("{}/{}", hours(cell.target), hours(cell.actual))
    };
    (fit(&first), fit(&second))
}

fn fit(text: &str) -> String {
    let truncated: String = text.chars().take(CELL_WIDTH).collect();
    format!("{:<width$}", truncated, width = CELL_WIDTH)
}

fn paint_cell(text: &str, cell: &DayCell, prefs: &OutputPreferences) -> String {
    if prefs.plain() {
        return text.to_string();
    }
    let mut styled = text.normal();
    if cell.colored {
        styled = if prefs.high_contrast_mode {
            match cell.status {
                RagStatus::Green => styled.bold(),
                RagStatus::Amber => styled.underline(),
                RagStatus::Red => styled.reversed(),
            }
        } else {
            match cell.status {
                RagStatus::Green => styled.black().on_green(),
                RagStatus::Amber => styled.black().on_yellow(),
                RagStatus::Red => styled.white().on_red(),
            }
        };
    }
    if cell.is_today {
        styled = styled.bold();
    }
    if !cell.in_focus_month {
        styled = styled.dimmed();
    }
    styled.to_string()
}

fn legend(prefs: &OutputPreferences) -> String {
    if prefs.plain() {
        "Legend: G met target, A within 10% of target, R more than 10% short; * today, # selected"
            .to_string()
    } else {
        format!(
            "Legend: {} met target  {} within 10%  {} more than 10% short  * today  # selected",
            "  ".on_green(),
            "  ".on_yellow(),
            "  ".on_red()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyEntry, Session};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain() -> OutputPreferences {
        OutputPreferences {
            screen_reader_mode: true,
            high_contrast_mode: false,
        }
    }

    fn state_with(entries: Vec<DailyEntry>, cursor: NaiveDate) -> CalendarState {
        let mut state = CalendarState::new(Session::new(Uuid::nil()), cursor);
        state.entries = entries;
        state
    }

    #[test]
    fn month_grid_starts_on_sunday_and_covers_whole_weeks() {
        let state = state_with(Vec::new(), date(2025, 3, 10));
        let rendered = render_month(&state, date(2025, 3, 10), &plain());
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Sun"));
        // March 2025 spans six Sunday-first weeks: header, 12 cell lines, legend.
        assert_eq!(lines.len(), 14);
        // First cell is Feb 23.
        assert!(lines[1].starts_with("23"));
    }

    #[test]
    fn past_days_carry_a_status_tag_and_future_days_do_not() {
        let entries = vec![
            DailyEntry::new(Uuid::nil(), date(2025, 3, 3), 8.0, 7.5),
            DailyEntry::new(Uuid::nil(), date(2025, 3, 20), 8.0, 0.0),
        ];
        let state = state_with(entries, date(2025, 3, 10));
        let rendered = render_month(&state, date(2025, 3, 10), &plain());
        assert!(rendered.contains(" 3 A"));
        assert!(rendered.contains("8/7.5"));
        assert!(rendered.contains("10* G"));
        assert!(rendered.contains("20      "));
        assert!(!rendered.contains("20 R"));
    }

    #[test]
    fn selected_day_is_marked_in_month_and_week_views() {
        let mut state = state_with(Vec::new(), date(2025, 3, 10));
        state.select(date(2025, 3, 10));
        let month = render_month(&state, date(2025, 3, 10), &plain());
        assert!(month.contains("10*# G"));

        state.select(date(2025, 3, 12));
        state.set_view(CalendarView::Week);
        let week = render_week(&state, date(2025, 3, 10), &plain());
        assert!(week.contains("Wed 03/12 #  target"));
        assert!(week.contains("Mon 03/10 *  target"));
        assert!(week.contains("Tue 03/11    target"));
    }

    #[test]
    fn day_view_reports_missing_entries() {
        let mut state = state_with(Vec::new(), date(2025, 3, 10));
        state.set_view(CalendarView::Day);
        let rendered = render_day(&state, date(2025, 3, 12), &plain());
        assert!(rendered.contains("No entry recorded."));
        assert!(rendered.contains("GREEN"));
    }

    #[test]
    fn titles_follow_the_view() {
        let mut state = state_with(Vec::new(), date(2025, 3, 12));
        assert_eq!(title(&state), "March 2025");
        state.set_view(CalendarView::Week);
        assert_eq!(title(&state), "Week of Mar 09, 2025");
        state.set_view(CalendarView::Day);
        assert_eq!(title(&state), "Wednesday, March 12, 2025");
    }
}
