mod common;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use common::date;
use hours_core::{
    config::{ConfigManager, DEFAULT_MODEL},
    core::services::{EntryService, TargetService},
    domain::{EntryPatch, Session},
    storage::{EntryStore, JsonStorage, StoreDocument, STORE_SCHEMA_VERSION},
};
use predicates::prelude::*;
use uuid::Uuid;

#[test]
fn store_lives_under_the_data_directory() {
    let home = TempDir::new().unwrap();
    let storage = JsonStorage::new(Some(home.path().to_path_buf())).unwrap();
    let session = Session::new(Uuid::new_v4());

    EntryService::upsert(&storage, &session, date(2025, 5, 2), EntryPatch::new(Some(8.0), None))
        .unwrap();

    let file = home.child("data").child("entries.json");
    file.assert(predicate::path::exists());
    file.assert(predicate::str::contains("\"entry_date\": \"2025-05-02\""));
    file.assert(predicate::str::contains(format!("\"schema_version\": {}", STORE_SCHEMA_VERSION)));
    home.child("data").child("entries.json.tmp").assert(predicate::path::missing());
}

#[test]
fn writes_are_visible_to_a_second_handle() {
    let home = TempDir::new().unwrap();
    let first = JsonStorage::new(Some(home.path().to_path_buf())).unwrap();
    let second = JsonStorage::new(Some(home.path().to_path_buf())).unwrap();
    let session = Session::new(Uuid::new_v4());

    EntryService::upsert(&first, &session, date(2025, 5, 2), EntryPatch::new(Some(8.0), Some(7.0)))
        .unwrap();
    TargetService::set(&first, &session, date(2025, 5, 20), 150.0).unwrap();

    let entries = second.fetch_entries(&session).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].actual_hours, 7.0);
    let target = TargetService::current(&second, &session, date(2025, 5, 1))
        .unwrap()
        .unwrap();
    assert_eq!(target.target_hours, 150.0);
}

#[test]
fn documents_without_schema_version_load_as_current() {
    let home = TempDir::new().unwrap();
    home.child("data").create_dir_all().unwrap();
    home.child("data/entries.json")
        .write_str(r#"{"daily_entries": [], "monthly_targets": []}"#)
        .unwrap();
    let storage = JsonStorage::new(Some(home.path().to_path_buf())).unwrap();
    let document: StoreDocument = storage.load_document().unwrap();
    assert_eq!(document.schema_version, STORE_SCHEMA_VERSION);
}

#[test]
fn corrupt_store_surfaces_an_error() {
    let home = TempDir::new().unwrap();
    home.child("data").create_dir_all().unwrap();
    home.child("data/entries.json").write_str("{ nope").unwrap();
    let storage = JsonStorage::new(Some(home.path().to_path_buf())).unwrap();
    assert!(storage.fetch_entries(&Session::new(Uuid::new_v4())).is_err());
}

#[test]
fn config_is_created_once_with_defaults() {
    let home = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).unwrap();
    let config = manager.load_or_init().unwrap();

    let file = home.child("config").child("config.json");
    file.assert(predicate::path::exists());
    file.assert(predicate::str::contains(config.user_id.to_string()));
    assert_eq!(config.llm.model, DEFAULT_MODEL);
    assert!(!config.screen_reader_mode);
}
