use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative month-to-date progress against a monthly target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProgressLabel {
    OnTrack,
    Lagging,
    Ahead,
}

impl fmt::Display for ProgressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProgressLabel::OnTrack => "On Track",
            ProgressLabel::Lagging => "Lagging (Re-plan needed)",
            ProgressLabel::Ahead => "Ahead",
        };
        f.write_str(label)
    }
}

/// Decides whether the month is ahead, on track, or needs re-planning.
///
/// Lagging means the hours still scheduled for the rest of the month would
/// not close the gap to the target even if all of them were worked.
/// `_monthly_planned` is part of the call signature but not consulted.
pub fn evaluate_progress(
    monthly_target: f64,
    _monthly_planned: f64,
    monthly_actual: f64,
    remaining_planned: f64,
) -> ProgressLabel {
    if monthly_target == 0.0 {
        return ProgressLabel::OnTrack;
    }
    if monthly_actual >= monthly_target {
        return ProgressLabel::Ahead;
    }
    let required_to_meet_target = monthly_target - monthly_actual;
    if remaining_planned < required_to_meet_target {
        ProgressLabel::Lagging
    } else {
        ProgressLabel::OnTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_target_is_on_track() {
        assert_eq!(evaluate_progress(0.0, 10.0, 0.0, 0.0), ProgressLabel::OnTrack);
        assert_eq!(evaluate_progress(0.0, 0.0, 50.0, 5.0), ProgressLabel::OnTrack);
    }

    #[test]
    fn reaching_target_is_ahead() {
        assert_eq!(evaluate_progress(100.0, 0.0, 100.0, 0.0), ProgressLabel::Ahead);
        assert_eq!(evaluate_progress(100.0, 80.0, 130.0, 0.0), ProgressLabel::Ahead);
    }

    #[test]
    fn remaining_plan_decides_between_on_track_and_lagging() {
        assert_eq!(evaluate_progress(100.0, 0.0, 50.0, 60.0), ProgressLabel::OnTrack);
        assert_eq!(evaluate_progress(100.0, 0.0, 50.0, 50.0), ProgressLabel::OnTrack);
        assert_eq!(evaluate_progress(100.0, 0.0, 50.0, 40.0), ProgressLabel::Lagging);
    }

    #[test]
    fn planned_hours_do_not_change_the_outcome() {
        for planned in [0.0, 40.0, 500.0] {
            assert_eq!(
                evaluate_progress(100.0, planned, 50.0, 40.0),
                ProgressLabel::Lagging
            );
        }
    }

    #[test]
    fn labels_render_for_display() {
        assert_eq!(ProgressLabel::Lagging.to_string(), "Lagging (Re-plan needed)");
        assert_eq!(ProgressLabel::OnTrack.to_string(), "On Track");
    }
}
