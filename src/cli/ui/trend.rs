use colored::Colorize;

use crate::cli::output::OutputPreferences;
use crate::core::services::TrendPoint;

const DEFAULT_BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;
/// Columns taken by the label, series marker, and value around each bar.
const CHROME_WIDTH: usize = 28;

/// Bar width that fits the current terminal, falling back when it is unknown.
pub fn bar_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| (columns as usize).saturating_sub(CHROME_WIDTH))
        .unwrap_or(DEFAULT_BAR_WIDTH)
        .clamp(MIN_BAR_WIDTH, DEFAULT_BAR_WIDTH)
}

/// Paired target/actual bars per month, scaled to the largest value shown.
pub fn render_trend(points: &[TrendPoint], width: usize, prefs: &OutputPreferences) -> String {
    let max = points
        .iter()
        .flat_map(|point| [point.target, point.actual])
        .fold(0.0_f64, f64::max);

    let mut lines = Vec::with_capacity(points.len() * 2 + 1);
    for point in points {
        lines.push(format!(
            "{:<6} T {} {:>8.2}",
            point.label,
            bar(point.target, max, width, false, prefs),
            point.target
        ));
        lines.push(format!(
            "{:<6} A {} {:>8.2}",
            "",
            bar(point.actual, max, width, true, prefs),
            point.actual
        ));
    }
    lines.push("T = target hours, A = actual hours".to_string());
    lines.join("\n")
}

fn bar(value: f64, max: f64, width: usize, actual: bool, prefs: &OutputPreferences) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);
    let glyph = if actual { "#" } else { "=" };
    let body = glyph.repeat(filled);
    let padding = " ".repeat(width - filled);
    if prefs.plain() || prefs.high_contrast_mode {
        return format!("{}{}", body, padding);
    }
    let painted = if actual { body.green() } else { body.blue() };
    format!("{}{}", painted, padding)
}
