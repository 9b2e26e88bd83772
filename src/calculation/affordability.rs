//! Interactive affordability check.
//!
//! Answers "can I afford this absence" against current real-world time,
//! without touching the ledger: accrual runs from `today` (not the
//! historical as-of date) to the hypothetical absence's end, and every
//! absence ending by then — including the hypothetical one — is charged at
//! the same authoritative cost the ledger uses.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Holiday, PlannedAbsence, Profile};

use super::accrual::{AccrualTable, accrual_for_range};
use super::ledger::PERSONAL_DAY_HOURS;
use super::work_schedule::hours_for_absence_range;

/// The outcome of an affordability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordabilityResult {
    /// Whether the projected balance stays at or above zero.
    pub can_afford: bool,
    /// The projected balance at the hypothetical absence's end date.
    pub projected_balance: Decimal,
}

/// Full cost of one absence: schedule hours minus holidays, with the
/// personal-day deduction applied once and floored at zero.
fn absence_cost(absence: &PlannedAbsence, profile: &Profile, holidays: &[Holiday]) -> Decimal {
    let cost = hours_for_absence_range(absence.start, absence.end, &profile.schedule, holidays);
    if absence.personal_day {
        (cost - PERSONAL_DAY_HOURS).max(Decimal::ZERO)
    } else {
        cost
    }
}

/// Projects the balance at `target`, baselined at `today`.
///
/// `current_balance + accrual(service_start, today, target) - Σ cost` over
/// every absence whose end date is on or before `target`. `today` is an
/// explicit parameter so the computation stays a pure function.
pub fn projected_balance(
    profile: &Profile,
    today: NaiveDate,
    target: NaiveDate,
    absences: &[PlannedAbsence],
    holidays: &[Holiday],
    accrual_table: &AccrualTable,
) -> Decimal {
    let accrued = accrual_for_range(profile.service_start, today, target, accrual_table);

    let used: Decimal = absences
        .iter()
        .filter(|a| a.end <= target)
        .map(|a| absence_cost(a, profile, holidays))
        .sum();

    profile.current_balance + accrued - used
}

/// Checks whether a hypothetical absence is affordable.
///
/// The candidate is charged alongside every existing absence ending by its
/// end date; affordable iff the projected balance is >= 0.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_engine::calculation::{AccrualTable, can_afford};
/// use leave_engine::models::{PlannedAbsence, Profile, WorkSchedule};
///
/// let profile = Profile {
///     service_start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     current_balance: Decimal::new(50, 0),
///     balance_as_of: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
///     schedule: WorkSchedule::five_forty(),
///     personal_day_used: false,
/// };
///
/// let candidate = PlannedAbsence::new(
///     NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
/// );
///
/// let result = can_afford(
///     &profile,
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     &candidate,
///     &[],
///     &[],
///     &AccrualTable::default(),
/// );
/// assert!(result.can_afford);
/// ```
pub fn can_afford(
    profile: &Profile,
    today: NaiveDate,
    candidate: &PlannedAbsence,
    existing: &[PlannedAbsence],
    holidays: &[Holiday],
    accrual_table: &AccrualTable,
) -> AffordabilityResult {
    let mut all = existing.to_vec();
    all.push(candidate.clone());

    let balance = projected_balance(
        profile,
        today,
        candidate.end,
        &all,
        holidays,
        accrual_table,
    );

    AffordabilityResult {
        can_afford: balance >= Decimal::ZERO,
        projected_balance: balance,
    }
}
