//! Planned absence model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A planned vacation or other absence, inclusive of both endpoints.
///
/// The absence's cost in hours is never stored; it is recomputed on demand
/// from the current schedule and holiday calendar via
/// [`hours_for_absence_range`](crate::calculation::hours_for_absence_range),
/// so a schedule change retroactively reprices every absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAbsence {
    /// Stable identity for the absence.
    pub id: Uuid,
    /// First day of the absence.
    pub start: NaiveDate,
    /// Last day of the absence, inclusive. `start <= end` is expected.
    pub end: NaiveDate,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether one annual personal-day credit is applied to this absence,
    /// reducing its cost by a flat 8 hours (floored at zero).
    #[serde(default)]
    pub personal_day: bool,
}

impl PlannedAbsence {
    /// Creates an absence with a fresh id and no personal-day credit.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            description: None,
            personal_day: false,
        }
    }

    /// Whether this absence contains the given date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether this absence intersects the inclusive range `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && self.end >= start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_contains_is_inclusive_of_both_endpoints() {
        let absence = PlannedAbsence::new(date("2026-06-01"), date("2026-06-05"));
        assert!(absence.contains(date("2026-06-01")));
        assert!(absence.contains(date("2026-06-03")));
        assert!(absence.contains(date("2026-06-05")));
        assert!(!absence.contains(date("2026-05-31")));
        assert!(!absence.contains(date("2026-06-06")));
    }

    #[test]
    fn test_overlaps_touching_ranges() {
        let absence = PlannedAbsence::new(date("2026-06-01"), date("2026-06-05"));
        assert!(absence.overlaps(date("2026-06-05"), date("2026-06-10")));
        assert!(absence.overlaps(date("2026-05-25"), date("2026-06-01")));
        assert!(!absence.overlaps(date("2026-06-06"), date("2026-06-10")));
        assert!(!absence.overlaps(date("2026-05-25"), date("2026-05-31")));
    }

    #[test]
    fn test_absence_serialization_roundtrip() {
        let absence = PlannedAbsence {
            id: Uuid::new_v4(),
            start: date("2026-06-01"),
            end: date("2026-06-05"),
            description: Some("Beach week".to_string()),
            personal_day: true,
        };

        let json = serde_json::to_string(&absence).unwrap();
        let deserialized: PlannedAbsence = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, absence);
    }

    #[test]
    fn test_personal_day_defaults_to_false() {
        let json = r#"{
            "id": "3b9f6a2e-0a43-4aef-b227-1d1f62f0a8f2",
            "start": "2026-06-01",
            "end": "2026-06-05"
        }"#;

        let absence: PlannedAbsence = serde_json::from_str(json).unwrap();
        assert!(!absence.personal_day);
        assert_eq!(absence.description, None);
    }
}
