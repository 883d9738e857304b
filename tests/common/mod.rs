#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use chrono::NaiveDate;
use hours_core::{
    domain::{DailyEntry, Session},
    storage::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated store and a session for a random user.
pub fn setup_store() -> (JsonStorage, Session) {
    let storage = JsonStorage::new(Some(temp_home())).expect("create json storage backend");
    (storage, Session::new(Uuid::new_v4()))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn entry(day: NaiveDate, target: f64, actual: f64) -> DailyEntry {
    DailyEntry::new(Uuid::nil(), day, target, actual)
}

/// CLI command in script mode, rooted at `home`, with colour disabled.
pub fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("hours_core_cli").expect("binary built");
    cmd.env("HOURS_CORE_CLI_SCRIPT", "1")
        .env("HOURS_CORE_HOME", home)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}
