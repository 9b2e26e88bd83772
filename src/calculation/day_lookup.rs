//! Per-date calendar projection.
//!
//! Flattens a weekly ledger projection plus the absence and holiday lists
//! into one record per calendar date, the shape a calendar grid renders
//! from. Every per-date question is answered from a precomputed map or the
//! interval index, so the walk stays linear in the number of dates.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Holiday, PlannedAbsence, WeeklyLedgerEntry, WorkSchedule};

use super::calendar::dates_in_range;
use super::intervals::AbsenceIndex;
use super::work_schedule::{hours_for_absence_range, is_rdo, work_hours_for_day};

/// Everything a calendar grid needs to know about one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayInfo {
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// A scheduled day off under the 9/80 pattern.
    pub is_rdo: bool,
    /// An observed holiday.
    pub is_holiday: bool,
    /// The holiday's display name, when `is_holiday`.
    pub holiday_name: Option<String>,
    /// Scheduled hours for this date under the profile's schedule.
    pub work_hours: Decimal,
    /// The planned absence covering this date, if any.
    pub absence_id: Option<Uuid>,
    /// Total leave cost of the covering absence (whole range, not just
    /// this date).
    pub absence_hours: Option<Decimal>,
    /// This date is the first day of an absence flagged to spend the
    /// personal day.
    pub is_personal_day_start: bool,
    /// On Sundays, the ending balance of the Monday-start week closing
    /// that day.
    pub ending_balance: Option<Decimal>,
    /// On Sundays, the hours accrued over that same week.
    pub accrued: Option<Decimal>,
}

/// Projects one `DayInfo` per date in `[start, end]`.
///
/// Weekly balances attach on Sundays, keyed by the ledger entry's week-end
/// date; dates outside every ledger week simply carry no balance. Overlap
/// attribution follows the interval index: where two absences share a
/// date, the earlier-listed one owns it.
pub fn build_day_lookup(
    start: NaiveDate,
    end: NaiveDate,
    entries: &[WeeklyLedgerEntry],
    absences: &[PlannedAbsence],
    holidays: &[Holiday],
    schedule: &WorkSchedule,
) -> BTreeMap<NaiveDate, DayInfo> {
    let holiday_by_date: HashMap<NaiveDate, &Holiday> =
        holidays.iter().map(|h| (h.date, h)).collect();
    let entry_by_week_end: HashMap<NaiveDate, &WeeklyLedgerEntry> =
        entries.iter().map(|e| (e.week_end, e)).collect();
    let index = AbsenceIndex::new(absences);

    // Absence cost is a property of the whole range; price each absence
    // once rather than per covered date.
    let mut cost_by_id: HashMap<Uuid, Decimal> = HashMap::new();

    let mut lookup = BTreeMap::new();
    for date in dates_in_range(start, end) {
        let holiday = holiday_by_date.get(&date);
        let absence = index.absence_on(date);
        let absence_hours = absence.map(|a| {
            *cost_by_id
                .entry(a.id)
                .or_insert_with(|| hours_for_absence_range(a.start, a.end, schedule, holidays))
        });

        let week_entry = if date.weekday() == Weekday::Sun {
            entry_by_week_end.get(&date)
        } else {
            None
        };

        lookup.insert(
            date,
            DayInfo {
                is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                is_rdo: is_rdo(date, schedule),
                is_holiday: holiday.is_some(),
                holiday_name: holiday.map(|h| h.name.clone()),
                work_hours: work_hours_for_day(date, schedule),
                absence_id: absence.map(|a| a.id),
                absence_hours,
                is_personal_day_start: absence.is_some_and(|a| a.personal_day && a.start == date),
                ending_balance: week_entry.map(|e| e.ending_balance),
                accrued: week_entry.map(|e| e.accrued),
            },
        );
    }

    lookup
}
