//! Business logic helpers for daily entries.

use chrono::NaiveDate;

use crate::core::errors::{Result, TrackerError};
use crate::domain::{DailyEntry, EntryPatch, Session};
use crate::storage::EntryStore;

/// Provides validated upsert/delete helpers keyed on `(user, date)`.
pub struct EntryService;

impl EntryService {
    /// Merges `patch` into the entry for `date`, creating it when absent.
    ///
    /// Fields left `None` keep their stored value; a new entry zero-fills them.
    pub fn upsert(
        store: &dyn EntryStore,
        session: &Session,
        date: NaiveDate,
        patch: EntryPatch,
    ) -> Result<Vec<DailyEntry>> {
        if let Some(field) = patch.invalid_field() {
            return Err(TrackerError::InvalidInput(format!(
                "{field} must be a non-negative number"
            )));
        }

        let existing = store.find_entries(session, date)?;
        let written = match existing.into_iter().next() {
            Some(mut entry) => {
                entry.apply_patch(&patch);
                tracing::debug!(%date, id = %entry.id, "updating entry");
                store.update_entry(session, entry)?
            }
            None => {
                tracing::debug!(%date, "inserting entry");
                store.insert_entry(session, patch.into_entry(session.user_id, date))?
            }
        };
        Ok(vec![written])
    }

    /// Removes the entries for `date`, returning what was deleted.
    pub fn delete(
        store: &dyn EntryStore,
        session: &Session,
        date: NaiveDate,
    ) -> Result<Vec<DailyEntry>> {
        let removed = store.delete_entries(session, date)?;
        tracing::debug!(%date, removed = removed.len(), "deleted entries");
        Ok(removed)
    }

    pub fn list(store: &dyn EntryStore, session: &Session) -> Result<Vec<DailyEntry>> {
        store.fetch_entries(session)
    }
}
