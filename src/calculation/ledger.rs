//! Balance ledger projection.
//!
//! Walks Monday-start weeks from `forecast_start` to `forecast_end`,
//! threading a single running balance: accrue, subtract absence costs, cap.
//! The cap is sticky — accrual lost to the ceiling in one week is never
//! recovered — and negative balances are preserved as an over-commitment
//! signal, never floored.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AnnualSummary, Holiday, PlannedAbsence, Profile, WeeklyLedgerEntry};

use super::accrual::{AccrualTable, accrual_for_range};
use super::calendar::weeks_in_range;
use super::intervals::AbsenceIndex;
use super::work_schedule::{hours_for_absence_range, rdo_dates_in_range};

/// The hard accrual ceiling, in hours. Ending balances never exceed it.
pub const MAX_BALANCE: Decimal = Decimal::from_parts(320, 0, 0, false, 0);

/// The flat value of the annual personal-day credit, in hours.
pub const PERSONAL_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Defensive ceiling on the magnitude of a balance input, in hours.
const BALANCE_BOUND: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Defensive ceiling on a single holiday's hour value.
const HOLIDAY_HOURS_BOUND: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

fn validate_inputs(profile: &Profile, holidays: &[Holiday]) -> EngineResult<()> {
    if profile.current_balance.abs() > BALANCE_BOUND {
        return Err(EngineError::NegativeOrUnboundedInput {
            field: "current_balance".to_string(),
            message: format!(
                "{} exceeds the {}-hour magnitude bound",
                profile.current_balance, BALANCE_BOUND
            ),
        });
    }

    for holiday in holidays {
        if holiday.hours < Decimal::ZERO || holiday.hours > HOLIDAY_HOURS_BOUND {
            return Err(EngineError::NegativeOrUnboundedInput {
                field: "holiday.hours".to_string(),
                message: format!(
                    "'{}' on {} has {} hours (expected 0..=24)",
                    holiday.name, holiday.date, holiday.hours
                ),
            });
        }
    }

    Ok(())
}

/// The cost of `absence` restricted to the week `[week_start, week_end]`.
///
/// The personal-day deduction is applied once, in the week containing the
/// absence's own start date, so a multi-week absence is never credited
/// twice.
fn absence_cost_in_week(
    absence: &PlannedAbsence,
    week_start: NaiveDate,
    week_end: NaiveDate,
    profile: &Profile,
    holidays: &[Holiday],
) -> Decimal {
    let overlap_start = absence.start.max(week_start);
    let overlap_end = absence.end.min(week_end);
    let cost = hours_for_absence_range(overlap_start, overlap_end, &profile.schedule, holidays);

    let starts_this_week = absence.start >= week_start && absence.start <= week_end;
    if absence.personal_day && starts_this_week {
        (cost - PERSONAL_DAY_HOURS).max(Decimal::ZERO)
    } else {
        cost
    }
}

/// Whether the year-end personal-day credit lands in this week.
///
/// The rule: the credit is evaluated and applied in the week containing
/// December 31 of the week's *start* year, attributed to that ending year.
/// It is withheld when an absence flagged as using the personal day starts
/// in that year, or when the year is the as-of year and the profile records
/// the credit as already consumed. Weeks starting before the as-of date
/// never earn it: the baseline balance already embodies any prior credit.
fn personal_day_rollover(
    week_start: NaiveDate,
    week_end: NaiveDate,
    profile: &Profile,
    absences: &[PlannedAbsence],
) -> bool {
    if week_start < profile.balance_as_of {
        return false;
    }

    let year = week_start.year();
    let Some(dec_31) = NaiveDate::from_ymd_opt(year, 12, 31) else {
        return false;
    };
    if dec_31 < week_start || dec_31 > week_end {
        return false;
    }

    if year == profile.balance_as_of.year() && profile.personal_day_used {
        return false;
    }

    !absences
        .iter()
        .any(|a| a.personal_day && a.start.year() == year)
}

/// Projects the weekly balance ledger over `[forecast_start, forecast_end]`.
///
/// Produces one [`WeeklyLedgerEntry`] per Monday-start week touching the
/// range. Per week:
///
/// 1. Accrual is 0 for weeks starting before the profile's as-of date,
///    otherwise the tiered range accrual over the week.
/// 2. The week containing December 31 of its start year earns the flat
///    8-hour personal-day rollover unless already claimed (see
///    [`PERSONAL_DAY_HOURS`]).
/// 3. Used hours sum the in-week cost of every overlapping absence, with
///    the personal-day deduction applied once in the absence's start week.
/// 4. `ending = min(starting + accrued - used, MAX_BALANCE)`; negative
///    balances pass through.
///
/// The next week starts from this week's capped ending balance, so the
/// continuity invariant `entry[i+1].starting_balance ==
/// entry[i].ending_balance` holds across the output.
///
/// # Errors
///
/// Returns [`EngineError::NegativeOrUnboundedInput`] when the profile
/// balance or a holiday hour value falls outside its defensive bound.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_engine::calculation::{AccrualTable, project_weekly_balances};
/// use leave_engine::models::{Profile, WorkSchedule};
///
/// let profile = Profile {
///     service_start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     current_balance: Decimal::new(100, 0),
///     balance_as_of: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     schedule: WorkSchedule::five_forty(),
///     personal_day_used: false,
/// };
///
/// let entries = project_weekly_balances(
///     &profile,
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
///     &[],
///     &[],
///     &AccrualTable::default(),
/// ).unwrap();
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].ending_balance, Decimal::new(10276, 2));
/// ```
pub fn project_weekly_balances(
    profile: &Profile,
    forecast_start: NaiveDate,
    forecast_end: NaiveDate,
    absences: &[PlannedAbsence],
    holidays: &[Holiday],
    accrual_table: &AccrualTable,
) -> EngineResult<Vec<WeeklyLedgerEntry>> {
    validate_inputs(profile, holidays)?;

    let index = AbsenceIndex::new(absences);
    let weeks = weeks_in_range(forecast_start, forecast_end);
    debug!(
        weeks = weeks.len(),
        absences = absences.len(),
        holidays = holidays.len(),
        "projecting weekly balances"
    );

    let mut entries = Vec::with_capacity(weeks.len());
    let mut running_balance = profile.current_balance;

    for week_start in weeks {
        let week_end = week_start + Days::new(6);

        // No accrual is credited before the baseline measurement.
        let mut accrued = if week_start < profile.balance_as_of {
            Decimal::ZERO
        } else {
            accrual_for_range(profile.service_start, week_start, week_end, accrual_table)
        };

        if personal_day_rollover(week_start, week_end, profile, absences) {
            accrued += PERSONAL_DAY_HOURS;
        }

        let week_absences = index.overlapping(week_start, week_end);
        let used: Decimal = week_absences
            .iter()
            .map(|a| absence_cost_in_week(a, week_start, week_end, profile, holidays))
            .sum();

        let starting_balance = running_balance;
        let ending_balance = (starting_balance + accrued - used).min(MAX_BALANCE);

        let week_holidays: Vec<Holiday> = holidays
            .iter()
            .filter(|h| h.date >= week_start && h.date <= week_end)
            .cloned()
            .collect();

        let rdo_dates = match profile.schedule.rdo_pattern {
            Some(pattern) => rdo_dates_in_range(week_start, week_end, pattern),
            None => Vec::new(),
        };

        entries.push(WeeklyLedgerEntry {
            week_start,
            week_end,
            starting_balance,
            accrued,
            used,
            ending_balance,
            absences: week_absences.into_iter().cloned().collect(),
            holidays: week_holidays,
            rdo_dates,
        });

        running_balance = ending_balance;
    }

    Ok(entries)
}

/// Folds the weekly ledger into a summary for one calendar year.
///
/// A week belongs to the year its Monday start falls in. Returns the
/// all-zero [`AnnualSummary::empty`] when no projected week starts in the
/// year.
pub fn annual_summary(entries: &[WeeklyLedgerEntry], year: i32) -> AnnualSummary {
    let year_entries: Vec<&WeeklyLedgerEntry> = entries
        .iter()
        .filter(|e| e.week_start.year() == year)
        .collect();

    let (Some(first), Some(last)) = (year_entries.first(), year_entries.last()) else {
        return AnnualSummary::empty(year);
    };

    let mut distinct_absences: Vec<uuid::Uuid> = year_entries
        .iter()
        .flat_map(|e| e.absences.iter().map(|a| a.id))
        .collect();
    distinct_absences.sort();
    distinct_absences.dedup();

    AnnualSummary {
        year,
        starting_balance: first.starting_balance,
        total_accrued: year_entries.iter().map(|e| e.accrued).sum(),
        total_used: year_entries.iter().map(|e| e.used).sum(),
        ending_balance: last.ending_balance,
        total_planned_absences: distinct_absences.len(),
        total_holiday_hours: year_entries
            .iter()
            .flat_map(|e| e.holidays.iter().map(|h| h.hours))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calendar::parse_date;
    use crate::models::{RdoPattern, WorkSchedule};

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn five_forty_profile() -> Profile {
        Profile {
            service_start: date("2020-01-01"),
            current_balance: Decimal::new(100, 0),
            balance_as_of: date("2024-01-07"),
            schedule: WorkSchedule::five_forty(),
            personal_day_used: false,
        }
    }

    fn holiday(name: &str, s: &str, hours: i64) -> Holiday {
        Holiday {
            name: name.to_string(),
            date: date(s),
            hours: Decimal::new(hours, 0),
        }
    }

    fn project(
        profile: &Profile,
        start: &str,
        end: &str,
        absences: &[PlannedAbsence],
        holidays: &[Holiday],
    ) -> Vec<WeeklyLedgerEntry> {
        project_weekly_balances(
            profile,
            date(start),
            date(end),
            absences,
            holidays,
            &AccrualTable::default(),
        )
        .unwrap()
    }

    // ==========================================================================
    // LG-001: one quiet week accrues ~2.76 at the 12/month tier
    // ==========================================================================
    #[test]
    fn test_lg_001_single_week_accrual_scenario() {
        let profile = five_forty_profile();
        let entries = project(&profile, "2024-01-08", "2024-01-14", &[], &[]);

        assert_eq!(entries.len(), 1);
        let week = &entries[0];
        assert_eq!(week.week_start, date("2024-01-08"));
        assert_eq!(week.week_end, date("2024-01-14"));
        assert_eq!(week.starting_balance, Decimal::new(100, 0));
        assert_eq!(week.accrued, Decimal::new(276, 2));
        assert_eq!(week.used, Decimal::ZERO);
        assert_eq!(week.ending_balance, Decimal::new(10276, 2));
    }

    // ==========================================================================
    // LG-002: ledger continuity across a long projection
    // ==========================================================================
    #[test]
    fn test_lg_002_weekly_entries_are_continuous() {
        let profile = five_forty_profile();
        let absence = PlannedAbsence::new(date("2024-07-01"), date("2024-07-12"));
        let entries = project(&profile, "2024-01-08", "2025-12-31", &[absence], &[]);

        assert!(entries.len() > 100);
        for pair in entries.windows(2) {
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
        }
    }

    // ==========================================================================
    // LG-003: cap is applied and sticky
    // ==========================================================================
    #[test]
    fn test_lg_003_cap_holds_and_excess_accrual_is_lost() {
        let mut profile = five_forty_profile();
        profile.current_balance = Decimal::new(319, 0);
        let entries = project(&profile, "2024-01-08", "2024-03-31", &[], &[]);

        for entry in &entries {
            assert!(entry.ending_balance <= MAX_BALANCE);
        }
        // Once at the cap, later weeks stay pinned there rather than
        // banking the overflow.
        assert_eq!(entries.last().unwrap().ending_balance, MAX_BALANCE);
        assert_eq!(entries[2].starting_balance, MAX_BALANCE);
    }

    // ==========================================================================
    // LG-004: negative balances are preserved, not floored
    // ==========================================================================
    #[test]
    fn test_lg_004_overcommitment_goes_negative() {
        let mut profile = five_forty_profile();
        profile.current_balance = Decimal::new(10, 0);
        let absence = PlannedAbsence::new(date("2024-01-08"), date("2024-01-12"));
        let entries = project(&profile, "2024-01-08", "2024-01-14", &[absence], &[]);

        // 10 + 2.76 - 40 = -27.24
        assert_eq!(entries[0].ending_balance, Decimal::new(-2724, 2));
    }

    // ==========================================================================
    // LG-005: no accrual before the as-of date
    // ==========================================================================
    #[test]
    fn test_lg_005_weeks_before_as_of_accrue_nothing() {
        let profile = five_forty_profile();
        // Two weeks before the as-of week, one after
        let entries = project(&profile, "2023-12-25", "2024-01-14", &[], &[]);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].accrued, Decimal::ZERO);
        assert_eq!(entries[1].accrued, Decimal::ZERO);
        assert!(entries[2].accrued > Decimal::ZERO);
    }

    // ==========================================================================
    // LG-006: absence costs land in the weeks they overlap
    // ==========================================================================
    #[test]
    fn test_lg_006_multi_week_absence_splits_cost_by_week() {
        let profile = five_forty_profile();
        // Wed 2024-07-03 through Tue 2024-07-09: 3 work days then 2
        let absence = PlannedAbsence::new(date("2024-07-03"), date("2024-07-09"));
        let entries = project(&profile, "2024-07-01", "2024-07-14", &[absence], &[]);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].used, Decimal::new(24, 0));
        assert_eq!(entries[1].used, Decimal::new(16, 0));
        assert_eq!(entries[0].absences.len(), 1);
        assert_eq!(entries[1].absences.len(), 1);
    }

    #[test]
    fn test_holidays_reduce_absence_cost_in_week() {
        let profile = five_forty_profile();
        let holidays = vec![holiday("Independence Day", "2024-07-04", 8)];
        let absence = PlannedAbsence::new(date("2024-07-01"), date("2024-07-05"));
        let entries = project(&profile, "2024-07-01", "2024-07-07", &[absence], &holidays);

        // 5 weekdays minus the Thursday holiday
        assert_eq!(entries[0].used, Decimal::new(32, 0));
        assert_eq!(entries[0].holidays.len(), 1);
    }

    // ==========================================================================
    // LG-007: personal-day deduction applies once, in the start week
    // ==========================================================================
    #[test]
    fn test_lg_007_personal_day_deducted_only_in_start_week() {
        let profile = five_forty_profile();
        let mut absence = PlannedAbsence::new(date("2024-07-03"), date("2024-07-09"));
        absence.personal_day = true;
        let entries = project(&profile, "2024-07-01", "2024-07-14", &[absence], &[]);

        // First week: 24 - 8 = 16; second week keeps its full 16
        assert_eq!(entries[0].used, Decimal::new(16, 0));
        assert_eq!(entries[1].used, Decimal::new(16, 0));
    }

    #[test]
    fn test_personal_day_deduction_floors_at_zero() {
        let profile = five_forty_profile();
        // A Saturday-only absence costs 0; the deduction must not go negative
        let mut absence = PlannedAbsence::new(date("2024-07-06"), date("2024-07-06"));
        absence.personal_day = true;
        let entries = project(&profile, "2024-07-01", "2024-07-07", &[absence], &[]);

        assert_eq!(entries[0].used, Decimal::ZERO);
    }

    // ==========================================================================
    // LG-008: year-end personal-day rollover
    // ==========================================================================
    #[test]
    fn test_lg_008_rollover_credited_in_week_containing_dec_31() {
        let profile = five_forty_profile();
        // 2024-12-31 is a Tuesday; its week runs 2024-12-30 to 2025-01-05
        let entries = project(&profile, "2024-12-01", "2025-01-12", &[], &[]);

        let rollover_week = entries
            .iter()
            .find(|e| e.week_start == date("2024-12-30"))
            .unwrap();
        // 2.76 base accrual + 8 rollover
        assert_eq!(rollover_week.accrued, Decimal::new(1076, 2));

        // Every other week stays at base accrual
        for entry in entries.iter().filter(|e| e.week_start != date("2024-12-30")) {
            assert!(entry.accrued < Decimal::new(4, 0));
        }
    }

    #[test]
    fn test_rollover_withheld_when_absence_claims_personal_day() {
        let profile = five_forty_profile();
        let mut absence = PlannedAbsence::new(date("2024-08-05"), date("2024-08-05"));
        absence.personal_day = true;
        let entries = project(&profile, "2024-12-23", "2025-01-05", &[absence], &[]);

        let rollover_week = entries
            .iter()
            .find(|e| e.week_start == date("2024-12-30"))
            .unwrap();
        assert_eq!(rollover_week.accrued, Decimal::new(276, 2));
    }

    #[test]
    fn test_rollover_withheld_when_profile_flag_covers_as_of_year() {
        let mut profile = five_forty_profile();
        profile.personal_day_used = true;
        let entries = project(&profile, "2024-12-23", "2025-01-05", &[], &[]);

        let rollover_week = entries
            .iter()
            .find(|e| e.week_start == date("2024-12-30"))
            .unwrap();
        // 2024 is the as-of year and the credit was already consumed
        assert_eq!(rollover_week.accrued, Decimal::new(276, 2));
    }

    #[test]
    fn test_rollover_withheld_for_weeks_before_as_of_date() {
        let profile = five_forty_profile();
        // The week containing 2023-12-31 predates the 2024-01-07 baseline;
        // the starting balance already reflects any 2023 credit
        let entries = project(&profile, "2023-12-25", "2023-12-31", &[], &[]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].accrued, Decimal::ZERO);
    }

    #[test]
    fn test_rollover_granted_next_year_despite_profile_flag() {
        let mut profile = five_forty_profile();
        profile.personal_day_used = true;
        // 2025-12-31 is a Wednesday; its week starts 2025-12-29
        let entries = project(&profile, "2025-12-01", "2026-01-11", &[], &[]);

        let rollover_week = entries
            .iter()
            .find(|e| e.week_start == date("2025-12-29"))
            .unwrap();
        // The profile flag only covers the as-of year (2024)
        assert!(rollover_week.accrued > Decimal::new(8, 0));
    }

    // ==========================================================================
    // LG-009: defensive input bounds
    // ==========================================================================
    #[test]
    fn test_lg_009_unbounded_balance_is_rejected() {
        let mut profile = five_forty_profile();
        profile.current_balance = Decimal::new(50_000, 0);
        let result = project_weekly_balances(
            &profile,
            date("2024-01-08"),
            date("2024-01-14"),
            &[],
            &[],
            &AccrualTable::default(),
        );

        match result {
            Err(EngineError::NegativeOrUnboundedInput { field, .. }) => {
                assert_eq!(field, "current_balance");
            }
            other => panic!("Expected NegativeOrUnboundedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_holiday_hours_out_of_range_rejected() {
        let profile = five_forty_profile();
        let holidays = vec![holiday("Broken", "2024-07-04", 25)];
        let result = project_weekly_balances(
            &profile,
            date("2024-07-01"),
            date("2024-07-07"),
            &[],
            &holidays,
            &AccrualTable::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_single_day_forecast_window() {
        let profile = five_forty_profile();
        let entries = project(&profile, "2024-03-13", "2024-03-13", &[], &[]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].week_start, date("2024-03-11"));
    }

    // ==========================================================================
    // LG-010: annual summary fold
    // ==========================================================================
    #[test]
    fn test_lg_010_annual_summary_folds_year_weeks() {
        let profile = five_forty_profile();
        let absence = PlannedAbsence::new(date("2024-07-01"), date("2024-07-05"));
        let holidays = vec![holiday("Independence Day", "2024-07-04", 8)];
        let entries = project(&profile, "2024-01-08", "2024-12-29", &[absence], &holidays);

        let summary = annual_summary(&entries, 2024);
        assert_eq!(summary.year, 2024);
        assert_eq!(summary.starting_balance, Decimal::new(100, 0));
        assert_eq!(summary.ending_balance, entries.last().unwrap().ending_balance);
        assert_eq!(summary.total_used, Decimal::new(32, 0));
        assert_eq!(summary.total_planned_absences, 1);
        assert_eq!(summary.total_holiday_hours, Decimal::new(8, 0));

        let expected_accrued: Decimal = entries.iter().map(|e| e.accrued).sum();
        assert_eq!(summary.total_accrued, expected_accrued);
    }

    #[test]
    fn test_annual_summary_counts_multi_week_absence_once() {
        let profile = five_forty_profile();
        let absence = PlannedAbsence::new(date("2024-07-01"), date("2024-07-12"));
        let entries = project(&profile, "2024-06-24", "2024-07-21", &[absence], &[]);

        let summary = annual_summary(&entries, 2024);
        assert_eq!(summary.total_planned_absences, 1);
    }

    #[test]
    fn test_annual_summary_empty_year() {
        let profile = five_forty_profile();
        let entries = project(&profile, "2024-01-08", "2024-02-04", &[], &[]);
        let summary = annual_summary(&entries, 2030);
        assert_eq!(summary, AnnualSummary::empty(2030));
    }
}
