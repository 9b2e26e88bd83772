//! Work-schedule model.
//!
//! Given a calendar date and a schedule configuration, yields the number of
//! paid work hours for that date, and derives the RDO Friday predicate and
//! the authoritative absence-cost function used by the ledger, the
//! affordability check, and the recommender alike.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{Holiday, RdoPattern, ScheduleType, WorkSchedule};

use super::calendar::{dates_in_range, is_weekend, iso_week_number};

/// Hours on a regular weekday under the 5/40 schedule.
const FIVE_FORTY_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
/// Hours on a non-Friday weekday under the 9/80 schedule.
const NINE_EIGHTY_REGULAR_DAY: Decimal = Decimal::from_parts(9, 0, 0, false, 0);
/// Hours on a non-RDO Friday under the 9/80 schedule.
const NINE_EIGHTY_WORK_FRIDAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Whether a Friday is an RDO under the given parity pattern.
///
/// Parity is taken from the ISO week number, so the pattern stays stable
/// across year boundaries (a year's last Friday and the next year's first
/// Friday can share an ISO week but never the same parity twice in a row).
/// Non-Fridays are never RDOs.
fn is_rdo_friday(date: NaiveDate, pattern: RdoPattern) -> bool {
    if date.weekday() != Weekday::Fri {
        return false;
    }

    let even_week = iso_week_number(date) % 2 == 0;
    match pattern {
        RdoPattern::EvenFridays => even_week,
        RdoPattern::OddFridays => !even_week,
    }
}

/// Returns the paid work hours for a single date under a schedule.
///
/// Weekends always yield 0. The 5/40 schedule yields 8 on every weekday.
/// The 9/80 schedule yields 9 on non-Friday weekdays; Fridays yield 0 when
/// the Friday's ISO-week parity matches the schedule's RDO parity, else 8.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_engine::calculation::work_hours_for_day;
/// use leave_engine::models::{RdoPattern, WorkSchedule};
///
/// let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
/// // 2026-06-04 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 6, 4).unwrap();
/// assert_eq!(work_hours_for_day(thursday, &schedule), Decimal::new(9, 0));
/// // 2026-06-05 is an RDO Friday (ISO week 23)
/// let friday = NaiveDate::from_ymd_opt(2026, 6, 5).unwrap();
/// assert_eq!(work_hours_for_day(friday, &schedule), Decimal::ZERO);
/// ```
pub fn work_hours_for_day(date: NaiveDate, schedule: &WorkSchedule) -> Decimal {
    if is_weekend(date) {
        return Decimal::ZERO;
    }

    match schedule.schedule_type {
        ScheduleType::FiveForty => FIVE_FORTY_DAY,
        ScheduleType::NineEighty => {
            if date.weekday() == Weekday::Fri {
                match schedule.rdo_pattern {
                    Some(pattern) if is_rdo_friday(date, pattern) => Decimal::ZERO,
                    _ => NINE_EIGHTY_WORK_FRIDAY,
                }
            } else {
                NINE_EIGHTY_REGULAR_DAY
            }
        }
    }
}

/// Whether the date is an RDO under the schedule.
///
/// True exactly when [`work_hours_for_day`] would return 0 for a Friday
/// under the 9/80 schedule; always false for the 5/40 schedule and for
/// non-Fridays.
pub fn is_rdo(date: NaiveDate, schedule: &WorkSchedule) -> bool {
    match (schedule.schedule_type, schedule.rdo_pattern) {
        (ScheduleType::NineEighty, Some(pattern)) => is_rdo_friday(date, pattern),
        _ => false,
    }
}

/// Collects every RDO Friday in `[start, end]` inclusive for a parity pattern.
pub fn rdo_dates_in_range(start: NaiveDate, end: NaiveDate, pattern: RdoPattern) -> Vec<NaiveDate> {
    dates_in_range(start, end)
        .filter(|d| is_rdo_friday(*d, pattern))
        .collect()
}

/// Computes the leave hours required to be absent over `[start, end]`.
///
/// Sums [`work_hours_for_day`] over every date in the range, except that
/// dates present in the holiday set contribute 0: the employee would not
/// have worked a holiday regardless.
///
/// This is the single authoritative cost of an absence. The ledger, the
/// affordability check, and the recommender all call it; keeping one copy
/// is what guarantees the interactive check agrees with the projection.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_engine::calculation::hours_for_absence_range;
/// use leave_engine::models::{Holiday, RdoPattern, WorkSchedule};
///
/// let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
/// // Mon-Fri where the Friday is an RDO: 9+9+9+9+0
/// let hours = hours_for_absence_range(
///     NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
///     &schedule,
///     &[],
/// );
/// assert_eq!(hours, Decimal::new(36, 0));
/// ```
pub fn hours_for_absence_range(
    start: NaiveDate,
    end: NaiveDate,
    schedule: &WorkSchedule,
    holidays: &[Holiday],
) -> Decimal {
    let holiday_dates: HashSet<NaiveDate> = holidays.iter().map(|h| h.date).collect();

    dates_in_range(start, end)
        .filter(|d| !holiday_dates.contains(d))
        .map(|d| work_hours_for_day(d, schedule))
        .sum()
}
