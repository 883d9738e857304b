use chrono::NaiveDate;

use crate::core::errors::{Result, TrackerError};
use crate::domain::{common::is_valid_hours, MonthlyTarget, Session};
use crate::storage::EntryStore;

pub const INVALID_TARGET_MESSAGE: &str = "Please enter a valid positive number for monthly target.";

/// Validation and persistence of per-month hour targets.
pub struct TargetService;

impl TargetService {
    /// Parses user input for a monthly target; rejects anything but a finite, non-negative number.
    pub fn parse_input(raw: &str) -> Result<f64> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| is_valid_hours(*value))
            .ok_or_else(|| TrackerError::InvalidInput(INVALID_TARGET_MESSAGE.into()))
    }

    pub fn set(
        store: &dyn EntryStore,
        session: &Session,
        month: NaiveDate,
        target_hours: f64,
    ) -> Result<MonthlyTarget> {
        if !is_valid_hours(target_hours) {
            return Err(TrackerError::InvalidInput(INVALID_TARGET_MESSAGE.into()));
        }
        let target = store.upsert_monthly_target(session, month, target_hours)?;
        tracing::info!(month = %target.month, hours = target.target_hours, "monthly target saved");
        Ok(target)
    }

    pub fn current(
        store: &dyn EntryStore,
        session: &Session,
        month: NaiveDate,
    ) -> Result<Option<MonthlyTarget>> {
        store.monthly_target(session, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_numbers() {
        assert_eq!(TargetService::parse_input("120").unwrap(), 120.0);
        assert_eq!(TargetService::parse_input(" 37.5 ").unwrap(), 37.5);
        assert_eq!(TargetService::parse_input("0").unwrap(), 0.0);
    }

    #[test]
    fn parse_rejects_garbage_and_negatives() {
        for raw in ["", "abc", "-4", "NaN", "inf"] {
            let err = TargetService::parse_input(raw).unwrap_err();
            assert!(
                err.to_string().contains("valid positive number"),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }
}
