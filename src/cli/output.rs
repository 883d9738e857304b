use colored::Colorize;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::RwLock;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
        }
    }

    /// True when no colour at all should be emitted.
    pub fn plain(&self) -> bool {
        self.screen_reader_mode
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn preferences() -> OutputPreferences {
    PREFERENCES.read().map(|guard| *guard).unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info | MessageKind::Section => "",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Hint => "hint:",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => text,
        _ => format!("{} {}", label(kind), text),
    };

    if prefs.plain() {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info | MessageKind::Hint => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.dimmed().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Writes pre-rendered text without any decoration.
pub fn raw(text: impl fmt::Display) {
    println!("{}", text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_reader_output_is_undecorated() {
        let prefs = OutputPreferences {
            screen_reader_mode: true,
            high_contrast_mode: false,
        };
        assert_eq!(apply_style(MessageKind::Error, "boom", &prefs), "[x] boom");
        assert_eq!(apply_style(MessageKind::Section, " Summary ", &prefs), "=== Summary ===");
        assert_eq!(apply_style(MessageKind::Info, "plain", &prefs), "plain");
    }
}
