use colored::Colorize;

use crate::cli::output::OutputPreferences;
use crate::core::services::PeriodSummary;
use crate::core::{ProgressLabel, RagStatusResult};

use super::style::status_word;

/// Monthly progress block followed by the month and year status cards.
pub fn render_summary(summary: &PeriodSummary, prefs: &OutputPreferences) -> String {
    let target = summary
        .monthly_target
        .map(|value| format!("{:.2}h", value))
        .unwrap_or_else(|| "N/A".to_string());
    let mut lines = vec![
        format!("Monthly Target            : {}", target),
        format!("Monthly Planned           : {:.2}h", summary.monthly_planned),
        format!("Monthly Actual            : {:.2}h", summary.monthly_actual),
        format!("Planned for rest of month : {:.2}h", summary.remaining_planned),
        format!("Progress Status           : {}", progress_text(summary.progress, prefs)),
        String::new(),
    ];
    lines.extend(card(
        &format!("Monthly Summary ({})", summary.month.format("%B %Y")),
        &summary.monthly,
        prefs,
    ));
    lines.push(String::new());
    lines.extend(card(
        &format!("Yearly Summary ({})", summary.month.format("%Y")),
        &summary.yearly,
        prefs,
    ));
    lines.join("\n")
}

fn card(title: &str, result: &RagStatusResult, prefs: &OutputPreferences) -> Vec<String> {
    vec![
        title.to_string(),
        format!("  Target : {:.2}h", result.target),
        format!("  Actual : {:.2}h", result.actual),
        format!("  Status : {}", status_word(result.status, prefs)),
    ]
}

fn progress_text(progress: ProgressLabel, prefs: &OutputPreferences) -> String {
    let label = progress.to_string();
    if prefs.plain() || prefs.high_contrast_mode {
        return label;
    }
    match progress {
        ProgressLabel::OnTrack => label.green().to_string(),
        ProgressLabel::Lagging => label.red().bold().to_string(),
        ProgressLabel::Ahead => label.cyan().to_string(),
    }
}
