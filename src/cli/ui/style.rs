use colored::Colorize;

use crate::cli::output::OutputPreferences;
use crate::core::RagStatus;

/// Single-letter tag used where colour is unavailable.
pub fn status_tag(status: RagStatus) -> &'static str {
    match status {
        RagStatus::Green => "G",
        RagStatus::Amber => "A",
        RagStatus::Red => "R",
    }
}

/// Upper-case status word, coloured unless the preferences forbid it.
pub fn status_word(status: RagStatus, prefs: &OutputPreferences) -> String {
    let word = status.to_string().to_uppercase();
    if prefs.plain() || prefs.high_contrast_mode {
        return word;
    }
    match status {
        RagStatus::Green => word.green().bold().to_string(),
        RagStatus::Amber => word.yellow().bold().to_string(),
        RagStatus::Red => word.red().bold().to_string(),
    }
}

/// Formats an hour value without trailing zeros (`8`, `7.5`).
pub fn hours(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}
