//! Calculation logic for the Leave Forecast Engine.
//!
//! This module contains the engine proper: the calendar kernel, the
//! work-schedule model, the tiered accrual model, the absence interval
//! index, the weekly balance ledger, the interactive affordability check,
//! the per-date calendar lookup, and the vacation recommendation engine
//! with its scoring functions.

mod accrual;
mod affordability;
mod calendar;
mod day_lookup;
mod intervals;
mod ledger;
mod recommend;
mod scoring;
mod work_schedule;

pub use accrual::{AccrualTable, AccrualTier, accrual_for_range, years_of_service};
pub use affordability::{AffordabilityResult, can_afford, projected_balance};
pub use calendar::{
    dates_in_range, format_date, is_weekend, iso_week_number, parse_date, week_end, week_start,
    weeks_in_range,
};
pub use day_lookup::{DayInfo, build_day_lookup};
pub use intervals::AbsenceIndex;
pub use ledger::{MAX_BALANCE, PERSONAL_DAY_HOURS, annual_summary, project_weekly_balances};
pub use recommend::{RecommendationRequest, recommend_vacations};
pub use scoring::{composite_score, efficiency_for, is_bracketed, is_free_day};
pub use work_schedule::{
    hours_for_absence_range, is_rdo, rdo_dates_in_range, work_hours_for_day,
};
