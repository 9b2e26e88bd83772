//! Recommendation scoring.
//!
//! Efficiency, bracketing, and the 50/25/25 composite score used to rank
//! candidate vacation windows, plus the free-day breakdown and the
//! human-readable context string attached to each recommendation.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{FreeDayBreakdown, WorkSchedule};

use super::calendar::{dates_in_range, format_date, is_weekend};
use super::work_schedule::is_rdo;

/// Efficiency assigned to an all-free window of 4+ days.
const FREE_LONG_EFFICIENCY: f64 = 999.0;
/// Efficiency assigned to an all-free window shorter than 4 days.
///
/// Keeps trivial 2-3 day free weekends from dominating the ranking on an
/// undefined-efficiency technicality while still rewarding them.
const FREE_SHORT_EFFICIENCY: f64 = 10.0;

/// Efficiency cap used inside the composite score.
const EFFICIENCY_CAP: f64 = 5.0;

/// Whether the date costs no leave: weekend, RDO, or holiday.
pub fn is_free_day(
    date: NaiveDate,
    schedule: &WorkSchedule,
    holiday_dates: &HashSet<NaiveDate>,
) -> bool {
    is_weekend(date) || is_rdo(date, schedule) || holiday_dates.contains(&date)
}

/// Whether a window is bracketed by work days.
///
/// True iff the window starts on a free day immediately preceded by a work
/// day AND ends on a free day immediately followed by a work day. A
/// bracketed window wastes no adjacent free days outside itself.
pub fn is_bracketed(
    start: NaiveDate,
    end: NaiveDate,
    schedule: &WorkSchedule,
    holiday_dates: &HashSet<NaiveDate>,
) -> bool {
    let day_before = start - Days::new(1);
    let day_after = end + Days::new(1);

    is_free_day(start, schedule, holiday_dates)
        && !is_free_day(day_before, schedule, holiday_dates)
        && is_free_day(end, schedule, holiday_dates)
        && !is_free_day(day_after, schedule, holiday_dates)
}

/// Calendar days off per standard work day of leave spent.
///
/// `total_days / (cost / standard_day_hours)`, where a standard day is 9
/// hours on the 9/80 schedule and 8 on 5/40 — so a non-RDO 8-hour Friday
/// on 9/80 correctly counts as 0.89 of a day. Zero-cost windows get the
/// fixed [`FREE_LONG_EFFICIENCY`] / [`FREE_SHORT_EFFICIENCY`] constants.
pub fn efficiency_for(total_days: u32, cost: Decimal, schedule: &WorkSchedule) -> f64 {
    if cost == Decimal::ZERO {
        return if total_days >= 4 {
            FREE_LONG_EFFICIENCY
        } else {
            FREE_SHORT_EFFICIENCY
        };
    }

    let hours = cost.to_f64().unwrap_or(f64::MAX);
    let equivalent_work_days = hours / f64::from(schedule.standard_day_hours());
    f64::from(total_days) / equivalent_work_days
}

/// Composite 0-100 ranking score.
///
/// 50% efficiency (capped at 5.0; zero-cost windows score as an effective
/// 3.0 for 4+ days or 1.5 for shorter), 25% bracketing bonus, and 25%
/// trip length on a natural-log scale that tops out at 14 days.
pub fn composite_score(
    efficiency: f64,
    bracketed: bool,
    total_days: u32,
    cost: Decimal,
) -> f64 {
    let normalized_efficiency = if cost == Decimal::ZERO {
        if total_days >= 4 { 3.0 } else { 1.5 }
    } else {
        efficiency.min(EFFICIENCY_CAP)
    };
    let efficiency_score = normalized_efficiency / EFFICIENCY_CAP * 50.0;

    let bracketing_score = if bracketed { 25.0 } else { 0.0 };

    let length_score = (f64::from(total_days).ln() / 14_f64.ln() * 25.0).min(25.0);

    efficiency_score + bracketing_score + length_score
}

/// Counts free days by type inside `[start, end]`.
///
/// A holiday weekday counts as a holiday, not an RDO, even when both
/// apply; weekends win over both.
pub(crate) fn count_free_days(
    start: NaiveDate,
    end: NaiveDate,
    schedule: &WorkSchedule,
    holiday_dates: &HashSet<NaiveDate>,
) -> FreeDayBreakdown {
    let mut breakdown = FreeDayBreakdown::default();

    for date in dates_in_range(start, end) {
        if is_weekend(date) {
            breakdown.weekends += 1;
        } else if holiday_dates.contains(&date) {
            breakdown.holidays += 1;
        } else if is_rdo(date, schedule) {
            breakdown.rdos += 1;
        }
    }

    breakdown
}

fn plural(count: u32) -> &'static str {
    if count > 1 { "s" } else { "" }
}

/// Builds the human-readable justification for a window.
///
/// Names holidays adjacent to or on the window's boundaries, then lists
/// the free-day counts it captures.
pub(crate) fn context_for(
    start: NaiveDate,
    end: NaiveDate,
    free_days: &FreeDayBreakdown,
    holiday_names: &HashMap<NaiveDate, String>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    let day_before = start - Days::new(1);
    let day_after = end + Days::new(1);

    let before = holiday_names.get(&day_before);
    let after = holiday_names.get(&day_after);

    if let Some(name) = before {
        parts.push(format!("{} on {}", name, format_date(day_before)));
    }
    if let Some(name) = after {
        parts.push(format!("{} on {}", name, format_date(day_after)));
    }
    if before.is_none() {
        if let Some(name) = holiday_names.get(&start) {
            parts.push(format!("starts on {}", name));
        }
    }
    if after.is_none() {
        if let Some(name) = holiday_names.get(&end) {
            parts.push(format!("ends on {}", name));
        }
    }

    if free_days.weekends > 0 {
        parts.push(format!(
            "includes {} weekend day{}",
            free_days.weekends,
            plural(free_days.weekends)
        ));
    }
    if free_days.holidays > 0 {
        parts.push(format!(
            "{} holiday{}",
            free_days.holidays,
            plural(free_days.holidays)
        ));
    }
    if free_days.rdos > 0 {
        parts.push(format!("{} RDO{}", free_days.rdos, plural(free_days.rdos)));
    }

    if parts.is_empty() {
        "Extends weekend".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calendar::parse_date;
    use crate::models::RdoPattern;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn holiday_set(dates: &[&str]) -> HashSet<NaiveDate> {
        dates.iter().map(|s| date(s)).collect()
    }

    // ==========================================================================
    // SC-001: free-day predicate
    // ==========================================================================
    #[test]
    fn test_sc_001_free_day_types() {
        let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
        let holidays = holiday_set(&["2026-11-26"]);

        assert!(is_free_day(date("2026-11-21"), &schedule, &holidays)); // Saturday
        assert!(is_free_day(date("2026-11-26"), &schedule, &holidays)); // holiday
        assert!(is_free_day(date("2026-06-05"), &schedule, &holidays)); // RDO Friday
        assert!(!is_free_day(date("2026-11-23"), &schedule, &holidays)); // Monday
    }

    // ==========================================================================
    // SC-002: bracketing requires work days on both flanks
    // ==========================================================================
    #[test]
    fn test_sc_002_weekend_window_is_bracketed() {
        let schedule = WorkSchedule::five_forty();
        let holidays = HashSet::new();
        // Sat-Sun flanked by Friday and Monday work days
        assert!(is_bracketed(
            date("2026-01-17"),
            date("2026-01-18"),
            &schedule,
            &holidays
        ));
    }

    #[test]
    fn test_window_starting_midweekend_is_not_bracketed() {
        let schedule = WorkSchedule::five_forty();
        let holidays = HashSet::new();
        // Starts Sunday: the preceding Saturday is free, so the window
        // wastes it
        assert!(!is_bracketed(
            date("2026-01-18"),
            date("2026-01-18"),
            &schedule,
            &holidays
        ));
    }

    #[test]
    fn test_window_ending_on_workday_is_not_bracketed() {
        let schedule = WorkSchedule::five_forty();
        let holidays = HashSet::new();
        assert!(!is_bracketed(
            date("2026-01-17"),
            date("2026-01-19"),
            &schedule,
            &holidays
        ));
    }

    // ==========================================================================
    // SC-003: efficiency
    // ==========================================================================
    #[test]
    fn test_sc_003_efficiency_uses_standard_day_hours() {
        let nine_eighty = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
        let five_forty = WorkSchedule::five_forty();

        // 9 days off for 36 hours on 9/80: 9 / (36/9) = 2.25
        let eff = efficiency_for(9, Decimal::new(36, 0), &nine_eighty);
        assert!((eff - 2.25).abs() < 1e-9);

        // 9 days off for 40 hours on 5/40: 9 / (40/8) = 1.8
        let eff = efficiency_for(9, Decimal::new(40, 0), &five_forty);
        assert!((eff - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_cost_efficiency_constants() {
        let schedule = WorkSchedule::five_forty();
        assert_eq!(efficiency_for(4, Decimal::ZERO, &schedule), 999.0);
        assert_eq!(efficiency_for(3, Decimal::ZERO, &schedule), 10.0);
        assert_eq!(efficiency_for(2, Decimal::ZERO, &schedule), 10.0);
    }

    // ==========================================================================
    // SC-004: composite score components
    // ==========================================================================
    #[test]
    fn test_sc_004_score_is_bounded_0_to_100() {
        let max = composite_score(999.0, true, 14, Decimal::new(1, 0));
        assert!(max <= 100.0);

        let min = composite_score(0.0, false, 1, Decimal::new(40, 0));
        assert_eq!(min, 0.0);
    }

    #[test]
    fn test_bracketing_adds_exactly_25() {
        let cost = Decimal::new(36, 0);
        let with = composite_score(2.0, true, 9, cost);
        let without = composite_score(2.0, false, 9, cost);
        assert!((with - without - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_bonus_saturates_at_14_days() {
        let cost = Decimal::new(72, 0);
        let at_14 = composite_score(2.0, false, 14, cost);
        let at_19 = composite_score(2.0, false, 19, cost);
        assert!((at_14 - at_19).abs() < 1e-9);
    }

    #[test]
    fn test_zero_cost_windows_score_moderately() {
        // A free 4-day window scores as an effective 3.0 efficiency, not 999
        let long_free = composite_score(999.0, false, 4, Decimal::ZERO);
        let expected = 3.0 / 5.0 * 50.0 + (4_f64.ln() / 14_f64.ln() * 25.0);
        assert!((long_free - expected).abs() < 1e-9);

        let short_free = composite_score(10.0, false, 3, Decimal::ZERO);
        let expected = 1.5 / 5.0 * 50.0 + (3_f64.ln() / 14_f64.ln() * 25.0);
        assert!((short_free - expected).abs() < 1e-9);
    }

    // ==========================================================================
    // SC-005: free-day breakdown precedence
    // ==========================================================================
    #[test]
    fn test_sc_005_breakdown_counts_by_type() {
        let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
        let holidays = holiday_set(&["2026-11-26", "2026-11-27"]);

        // Sat 21 .. Sun 29: 4 weekend days, 2 holidays, no RDO (week 48 even)
        let breakdown = count_free_days(date("2026-11-21"), date("2026-11-29"), &schedule, &holidays);
        assert_eq!(breakdown.weekends, 4);
        assert_eq!(breakdown.holidays, 2);
        assert_eq!(breakdown.rdos, 0);
    }

    #[test]
    fn test_rdo_counted_when_not_holiday() {
        let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
        let holidays = HashSet::new();
        // 2026-06-05 is an RDO Friday
        let breakdown = count_free_days(date("2026-06-01"), date("2026-06-07"), &schedule, &holidays);
        assert_eq!(breakdown.rdos, 1);
        assert_eq!(breakdown.weekends, 2);
    }

    // ==========================================================================
    // SC-006: context strings
    // ==========================================================================
    #[test]
    fn test_sc_006_context_names_adjacent_holiday() {
        let mut names = HashMap::new();
        names.insert(date("2026-11-26"), "Thanksgiving".to_string());

        let free_days = FreeDayBreakdown {
            weekends: 2,
            holidays: 0,
            rdos: 0,
        };
        // Window ends the day before Thanksgiving
        let context = context_for(date("2026-11-21"), date("2026-11-25"), &free_days, &names);
        assert!(context.contains("Thanksgiving on 2026-11-26"));
        assert!(context.contains("includes 2 weekend days"));
    }

    #[test]
    fn test_context_falls_back_to_extends_weekend() {
        let names = HashMap::new();
        let free_days = FreeDayBreakdown::default();
        let context = context_for(date("2026-01-20"), date("2026-01-21"), &free_days, &names);
        assert_eq!(context, "Extends weekend");
    }
}
