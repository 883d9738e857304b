//! Shell context, command dispatch, and the errors commands report.

use std::{io, path::PathBuf};

use chrono::{Duration, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::{
        errors::TrackerError,
        time::{Clock, SystemClock},
        utils::{app_data_dir, history_file_in},
    },
    storage::JsonStorage,
};

pub use crate::core::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandDefinition, CommandRegistry};
use super::state::CalendarState;
use super::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub storage: JsonStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub state: CalendarState,
    clock: Box<dyn Clock>,
    base_dir: PathBuf,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_parts(mode, app_data_dir(), Box::new(SystemClock))
    }

    /// Builds a context rooted at `base_dir` with an explicit clock.
    pub fn with_parts(
        mode: CliMode,
        base_dir: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base_dir.clone())?;
        let config = config_manager.load_or_init()?;
        output::set_preferences(OutputPreferences::from_config(&config));
        let storage = JsonStorage::new(Some(base_dir.clone()))?;

        let today = clock.today();
        let state = CalendarState::new(config.session(), today);
        let mut context = ShellContext {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            theme: ColorfulTheme::default(),
            storage,
            config_manager,
            config,
            state,
            clock,
            base_dir,
            running: true,
        };

        if let Err(err) = context.refresh() {
            tracing::error!(error = %err, "initial load of entries failed");
            cli_io::print_warning(format!("Could not load entries: {}", err));
        }
        tracing::info!(
            user = %context.config.user_id,
            store = %context.storage.path().display(),
            "shell ready"
        );
        Ok(context)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn preferences(&self) -> OutputPreferences {
        OutputPreferences::from_config(&self.config)
    }

    pub(crate) fn history_path(&self) -> PathBuf {
        history_file_in(&self.base_dir)
    }

    /// Reloads cached entries and the current month's target from the store.
    pub fn refresh(&mut self) -> Result<(), CommandError> {
        let today = self.today();
        self.state.refresh(&self.storage, today)?;
        Ok(())
    }

    pub(crate) fn prompt(&self) -> String {
        format!(
            "hours [{} {}]> ",
            self.state.view,
            self.state.cursor.format("%Y-%m-%d")
        )
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Prints the active calendar view.
    pub(crate) fn show_calendar(&self) {
        let prefs = self.preferences();
        output::section(ui::calendar::title(&self.state));
        output::raw(ui::calendar::render(&self.state, self.today(), &prefs));
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = crate::cli::shell::parse_command_line(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }
        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &lowered), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::warn!(error = %other, "command failed");
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }
}

/// Parses `YYYY-MM-DD` or one of `today`, `yesterday`, `tomorrow`.
pub(crate) fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, CommandError> {
    match input.to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        "tomorrow" => Ok(today + Duration::days(1)),
        _ => NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
            CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
        }),
    }
}

pub(crate) fn parse_hours(field: &str, raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "{} must be a non-negative number, got `{}`",
                field, raw
            ))
        })
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::core::time::Clock;

    pub struct FixedClock(pub NaiveDate);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.from_utc_datetime(&self.0.and_hms_opt(12, 0, 0).unwrap())
        }

        fn today(&self) -> NaiveDate {
            self.0
        }
    }
}
