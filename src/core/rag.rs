//! Red/Amber/Green classification of recorded hours against a target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DailyEntry;

/// Largest shortfall, as a fraction of the target, that still counts as amber.
pub const AMBER_THRESHOLD: f64 = 0.10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RagStatus {
    Red,
    Amber,
    Green,
}

impl fmt::Display for RagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RagStatus::Red => "red",
            RagStatus::Amber => "amber",
            RagStatus::Green => "green",
        };
        f.write_str(label)
    }
}

/// Status together with the numbers it was derived from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RagStatusResult {
    pub status: RagStatus,
    pub target: f64,
    pub actual: f64,
}

/// Classifies `actual` hours against `target` hours.
///
/// A zero target is trivially satisfied. Otherwise the result is green when
/// the target is met, amber when the shortfall is at most
/// [`AMBER_THRESHOLD`] of the target, and red beyond that. `target` must be
/// finite and non-negative.
pub fn classify(target: f64, actual: f64) -> RagStatusResult {
    let status = if target == 0.0 || actual >= target {
        RagStatus::Green
    } else {
        let shortfall_ratio = (target - actual) / target;
        if shortfall_ratio <= AMBER_THRESHOLD {
            RagStatus::Amber
        } else {
            RagStatus::Red
        }
    };
    RagStatusResult {
        status,
        target,
        actual,
    }
}

/// Classifies a single day; a missing entry counts as zero target and zero actual.
pub fn daily_status(entry: Option<&DailyEntry>) -> RagStatusResult {
    let (target, actual) = entry
        .map(|entry| (entry.target_hours, entry.actual_hours))
        .unwrap_or((0.0, 0.0));
    classify(target, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn zero_target_is_always_green() {
        for actual in [0.0, 0.5, 8.0, 1000.0] {
            assert_eq!(classify(0.0, actual).status, RagStatus::Green);
        }
    }

    #[test]
    fn meeting_or_beating_target_is_green() {
        assert_eq!(classify(8.0, 8.0).status, RagStatus::Green);
        assert_eq!(classify(8.0, 9.25).status, RagStatus::Green);
    }

    #[test]
    fn shortfall_thresholds() {
        assert_eq!(classify(10.0, 9.5).status, RagStatus::Amber);
        assert_eq!(classify(10.0, 9.0).status, RagStatus::Amber);
        assert_eq!(classify(10.0, 8.9).status, RagStatus::Red);
        assert_eq!(classify(10.0, 0.0).status, RagStatus::Red);
    }

    #[test]
    fn result_echoes_inputs() {
        let result = classify(6.0, 4.5);
        assert_eq!(result.target, 6.0);
        assert_eq!(result.actual, 4.5);
    }

    #[test]
    fn missing_day_is_green() {
        assert_eq!(daily_status(None).status, RagStatus::Green);
        let entry = DailyEntry::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            4.0,
            1.0,
        );
        assert_eq!(daily_status(Some(&entry)).status, RagStatus::Red);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RagStatus::Amber).unwrap(),
            "\"amber\""
        );
    }
}
