//! Ledger output models.
//!
//! A projection run produces an ordered, append-only sequence of
//! [`WeeklyLedgerEntry`] values plus per-year [`AnnualSummary`] rollups.
//! Both are ephemeral: recomputed whenever any input changes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Holiday, PlannedAbsence};

/// One week of the projected balance ledger.
///
/// Weeks are Monday-start, Sunday-end. The ledger invariant holds across the
/// sequence: each entry's `starting_balance` equals the previous entry's
/// `ending_balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLedgerEntry {
    /// The Monday this week starts on.
    pub week_start: NaiveDate,
    /// The Sunday this week ends on.
    pub week_end: NaiveDate,
    /// Balance carried in from the previous week (or the profile baseline).
    pub starting_balance: Decimal,
    /// Hours accrued this week, including any year-end personal-day credit.
    pub accrued: Decimal,
    /// Hours consumed by planned absences intersecting this week.
    pub used: Decimal,
    /// `min(starting_balance + accrued - used, 320)`. Negative values are
    /// preserved; only the upper cap applies.
    pub ending_balance: Decimal,
    /// Absences intersecting this week.
    pub absences: Vec<PlannedAbsence>,
    /// Holidays falling within this week.
    pub holidays: Vec<Holiday>,
    /// RDO Fridays falling within this week (9/80 schedules only).
    pub rdo_dates: Vec<NaiveDate>,
}

/// A fold of the weekly ledger over one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    /// The calendar year summarized.
    pub year: i32,
    /// Starting balance of the year's first projected week.
    pub starting_balance: Decimal,
    /// Sum of weekly accrued hours.
    pub total_accrued: Decimal,
    /// Sum of weekly used hours.
    pub total_used: Decimal,
    /// Ending balance of the year's last projected week.
    pub ending_balance: Decimal,
    /// Count of distinct absences touching the year's weeks.
    pub total_planned_absences: usize,
    /// Sum of holiday hour values across the year's weeks.
    pub total_holiday_hours: Decimal,
}

impl AnnualSummary {
    /// An all-zero summary for a year with no projected weeks.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            starting_balance: Decimal::ZERO,
            total_accrued: Decimal::ZERO,
            total_used: Decimal::ZERO,
            ending_balance: Decimal::ZERO,
            total_planned_absences: 0,
            total_holiday_hours: Decimal::ZERO,
        }
    }
}
