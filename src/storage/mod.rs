pub mod json_backend;

use chrono::NaiveDate;

use crate::{
    core::errors::Result,
    domain::{DailyEntry, MonthlyTarget, Session},
};

/// Abstraction over persistence backends holding daily entries and monthly targets.
///
/// Every call is scoped to the owner named by `session`; implementations
/// never return or touch another user's rows.
pub trait EntryStore: Send + Sync {
    /// All entries owned by the session user, in storage order.
    fn fetch_entries(&self, session: &Session) -> Result<Vec<DailyEntry>>;

    /// Entries recorded for `date`. Normally zero or one.
    fn find_entries(&self, session: &Session, date: NaiveDate) -> Result<Vec<DailyEntry>>;

    /// Persists a new entry. The owner is taken from `session`.
    fn insert_entry(&self, session: &Session, entry: DailyEntry) -> Result<DailyEntry>;

    /// Replaces the stored entry with the same id.
    fn update_entry(&self, session: &Session, entry: DailyEntry) -> Result<DailyEntry>;

    /// Removes every entry for `date`, returning the removed rows.
    fn delete_entries(&self, session: &Session, date: NaiveDate) -> Result<Vec<DailyEntry>>;

    fn monthly_target(&self, session: &Session, month: NaiveDate) -> Result<Option<MonthlyTarget>>;

    /// Inserts or updates the target keyed on `(user, first day of month)`.
    fn upsert_monthly_target(
        &self,
        session: &Session,
        month: NaiveDate,
        target_hours: f64,
    ) -> Result<MonthlyTarget>;
}

pub use json_backend::{JsonStorage, StoreDocument, STORE_SCHEMA_VERSION};
