use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::DateWindowError;

/// Unified error type for the domain, storage, and intake layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Language model request failed: {0}")]
    Llm(String),
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::StorageError(err.to_string())
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        TrackerError::Llm(err.to_string())
    }
}

impl From<DateWindowError> for TrackerError {
    fn from(err: DateWindowError) -> Self {
        TrackerError::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Core(TrackerError::from(err))
    }
}
