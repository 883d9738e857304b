use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        errors::{Result, TrackerError},
        utils::{app_data_dir, ensure_dir, store_file_in, write_atomic},
    },
    domain::{period::first_of_month, DailyEntry, Identifiable, MonthlyTarget, Owned, Session},
};

use super::EntryStore;

pub const STORE_SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the entry store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default = "StoreDocument::schema_version_default")]
    pub schema_version: u32,
    #[serde(default)]
    pub daily_entries: Vec<DailyEntry>,
    #[serde(default)]
    pub monthly_targets: Vec<MonthlyTarget>,
}

impl StoreDocument {
    fn schema_version_default() -> u32 {
        STORE_SCHEMA_VERSION
    }
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            schema_version: STORE_SCHEMA_VERSION,
            daily_entries: Vec::new(),
            monthly_targets: Vec::new(),
        }
    }
}

/// Entry store persisted as a single JSON document.
///
/// Each operation re-reads the document and writes it back atomically, so
/// callers always see the latest committed state.
#[derive(Clone, Debug)]
pub struct JsonStorage {
    root: PathBuf,
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let path = store_file_in(&root);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { root, path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_document(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let document: StoreDocument = serde_json::from_str(&data)?;
        if document.schema_version > STORE_SCHEMA_VERSION {
            return Err(TrackerError::StorageError(format!(
                "entry store `{}` is from a newer schema version",
                self.path.display()
            )));
        }
        Ok(document)
    }

    fn save_document(&self, document: &StoreDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = document.daily_entries.len(),
            targets = document.monthly_targets.len(),
            "entry store saved"
        );
        Ok(())
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut StoreDocument) -> Result<T>) -> Result<T> {
        let mut document = self.load_document()?;
        let value = f(&mut document)?;
        self.save_document(&document)?;
        Ok(value)
    }
}

impl EntryStore for JsonStorage {
    fn fetch_entries(&self, session: &Session) -> Result<Vec<DailyEntry>> {
        let document = self.load_document()?;
        Ok(document
            .daily_entries
            .into_iter()
            .filter(|entry| entry.is_owned_by(session.user_id))
            .collect())
    }

    fn find_entries(&self, session: &Session, date: NaiveDate) -> Result<Vec<DailyEntry>> {
        Ok(self
            .fetch_entries(session)?
            .into_iter()
            .filter(|entry| entry.entry_date == date)
            .collect())
    }

    fn insert_entry(&self, session: &Session, mut entry: DailyEntry) -> Result<DailyEntry> {
        entry.user_id = session.user_id;
        self.mutate(|document| {
            document.daily_entries.push(entry.clone());
            Ok(entry)
        })
    }

    fn update_entry(&self, session: &Session, mut entry: DailyEntry) -> Result<DailyEntry> {
        if !entry.is_owned_by(session.user_id) {
            return Err(TrackerError::InvalidInput(format!(
                "entry {} belongs to another user",
                entry.id
            )));
        }
        entry.updated_at = Utc::now();
        self.mutate(|document| {
            let slot = document
                .daily_entries
                .iter_mut()
                .find(|stored| stored.id() == entry.id() && stored.is_owned_by(session.user_id))
                .ok_or_else(|| {
                    TrackerError::StorageError(format!("entry {} not found", entry.id))
                })?;
            *slot = entry.clone();
            Ok(entry)
        })
    }

    fn delete_entries(&self, session: &Session, date: NaiveDate) -> Result<Vec<DailyEntry>> {
        self.mutate(|document| {
            let (removed, kept): (Vec<_>, Vec<_>) =
                document.daily_entries.drain(..).partition(|entry| {
                    entry.is_owned_by(session.user_id) && entry.entry_date == date
                });
            document.daily_entries = kept;
            Ok(removed)
        })
    }

    fn monthly_target(&self, session: &Session, month: NaiveDate) -> Result<Option<MonthlyTarget>> {
        let month = first_of_month(month);
        let document = self.load_document()?;
        Ok(document
            .monthly_targets
            .into_iter()
            .find(|target| target.is_owned_by(session.user_id) && target.month == month))
    }

    fn upsert_monthly_target(
        &self,
        session: &Session,
        month: NaiveDate,
        target_hours: f64,
    ) -> Result<MonthlyTarget> {
        let month = first_of_month(month);
        self.mutate(|document| {
            if let Some(existing) = document
                .monthly_targets
                .iter_mut()
                .find(|target| target.is_owned_by(session.user_id) && target.month == month)
            {
                existing.target_hours = target_hours;
                existing.updated_at = Utc::now();
                return Ok(existing.clone());
            }
            let target = MonthlyTarget::new(session.user_id, month, target_hours);
            document.monthly_targets.push(target.clone());
            Ok(target)
        })
    }
}
