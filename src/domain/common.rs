//! Shared traits and numeric helpers for persisted records.

use uuid::Uuid;

/// Exposes a stable identifier for records kept in the entry store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Associates a record with the user that owns it.
pub trait Owned {
    fn user_id(&self) -> Uuid;

    fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id() == user_id
    }
}

/// Returns `true` when `hours` is a finite, non-negative amount.
pub fn is_valid_hours(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_must_be_finite_and_non_negative() {
        assert!(is_valid_hours(0.0));
        assert!(is_valid_hours(7.5));
        assert!(!is_valid_hours(-0.5));
        assert!(!is_valid_hours(f64::NAN));
        assert!(!is_valid_hours(f64::INFINITY));
    }
}
