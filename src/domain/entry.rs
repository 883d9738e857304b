use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{is_valid_hours, Identifiable, Owned};
use super::period::first_of_month;

/// One user's planned and recorded hours for a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub target_hours: f64,
    pub actual_hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyEntry {
    pub fn new(user_id: Uuid, entry_date: NaiveDate, target_hours: f64, actual_hours: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            entry_date,
            target_hours,
            actual_hours,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied fields of `patch`, leaving `None` fields untouched.
    pub fn apply_patch(&mut self, patch: &EntryPatch) {
        if let Some(target) = patch.target_hours {
            self.target_hours = target;
        }
        if let Some(actual) = patch.actual_hours {
            self.actual_hours = actual;
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for DailyEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for DailyEntry {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

/// Partial update for a [`DailyEntry`]. `None` means "leave as is".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub target_hours: Option<f64>,
    #[serde(default)]
    pub actual_hours: Option<f64>,
}

impl EntryPatch {
    pub fn new(target_hours: Option<f64>, actual_hours: Option<f64>) -> Self {
        Self {
            target_hours,
            actual_hours,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target_hours.is_none() && self.actual_hours.is_none()
    }

    /// Returns the name of the first supplied field that is negative or not finite.
    pub fn invalid_field(&self) -> Option<&'static str> {
        if self.target_hours.is_some_and(|value| !is_valid_hours(value)) {
            return Some("target_hours");
        }
        if self.actual_hours.is_some_and(|value| !is_valid_hours(value)) {
            return Some("actual_hours");
        }
        None
    }

    /// Builds a fresh entry from this patch, zero-filling missing fields.
    pub fn into_entry(self, user_id: Uuid, entry_date: NaiveDate) -> DailyEntry {
        DailyEntry::new(
            user_id,
            entry_date,
            self.target_hours.unwrap_or(0.0),
            self.actual_hours.unwrap_or(0.0),
        )
    }
}

/// A user-set goal for total hours in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTarget {
    pub id: Uuid,
    pub user_id: Uuid,
    /// First day of the month; acts as the key together with `user_id`.
    pub month: NaiveDate,
    pub target_hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MonthlyTarget {
    pub fn new(user_id: Uuid, month: NaiveDate, target_hours: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            month: first_of_month(month),
            target_hours,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for MonthlyTarget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for MonthlyTarget {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn patch_only_overwrites_supplied_fields() {
        let mut entry = DailyEntry::new(Uuid::new_v4(), date(2025, 3, 4), 8.0, 6.0);
        entry.apply_patch(&EntryPatch::new(None, Some(7.5)));
        assert_eq!(entry.target_hours, 8.0);
        assert_eq!(entry.actual_hours, 7.5);
    }

    #[test]
    fn patch_into_entry_zero_fills() {
        let entry = EntryPatch::new(Some(4.0), None).into_entry(Uuid::new_v4(), date(2025, 3, 4));
        assert_eq!(entry.target_hours, 4.0);
        assert_eq!(entry.actual_hours, 0.0);
    }

    #[test]
    fn invalid_field_reports_negative_hours() {
        assert_eq!(
            EntryPatch::new(Some(-1.0), None).invalid_field(),
            Some("target_hours")
        );
        assert_eq!(
            EntryPatch::new(Some(1.0), Some(f64::NAN)).invalid_field(),
            Some("actual_hours")
        );
        assert_eq!(EntryPatch::new(Some(0.0), None).invalid_field(), None);
    }

    #[test]
    fn monthly_target_is_keyed_on_first_of_month() {
        let target = MonthlyTarget::new(Uuid::new_v4(), date(2025, 2, 17), 120.0);
        assert_eq!(target.month, date(2025, 2, 1));
    }

    #[test]
    fn entry_dates_serialize_as_plain_dates() {
        let entry = DailyEntry::new(Uuid::new_v4(), date(2025, 1, 9), 2.0, 1.0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entry_date"], "2025-01-09");
    }
}
