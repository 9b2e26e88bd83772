//! Recommendation output model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Counts of each free-day type inside a recommended window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeDayBreakdown {
    /// Weekend days (Saturday/Sunday) in the window.
    pub weekends: u32,
    /// Holiday weekdays in the window.
    pub holidays: u32,
    /// RDO Fridays in the window.
    pub rdos: u32,
}

/// A candidate vacation window produced by the recommendation engine.
///
/// Ranked descending by `score`; ties broken by start date, then end date,
/// so output is reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window, inclusive.
    pub end: NaiveDate,
    /// Total calendar days in the window.
    pub total_days: u32,
    /// Leave hours required to take the window off.
    pub hours_required: Decimal,
    /// Calendar days off per standard work day spent. Zero-cost windows are
    /// assigned 999.0 (4+ days) or 10.0 (shorter) rather than infinity.
    pub efficiency: f64,
    /// Composite 0-100 ranking score: 50% efficiency, 25% bracketing,
    /// 25% length.
    pub score: f64,
    /// Whether the window begins on a free day preceded by a work day and
    /// ends on a free day followed by a work day.
    pub is_bracketed: bool,
    /// Breakdown of the free days the window captures.
    pub free_days: FreeDayBreakdown,
    /// Human-readable justification (adjacent holidays, free-day counts).
    pub context: String,
}
