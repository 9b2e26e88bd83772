//! Tiered leave-accrual model.
//!
//! Accrual is earned at a monthly rate stepped by whole years of service.
//! Ranges accrue at a flat daily rate derived from an average month length
//! (`365.25 / 12` days), so a fixed-length window — every 7-day ledger week,
//! for example — earns the same hours no matter which month boundary it
//! straddles. A per-calendar-month proration would violate that invariant.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Average days per month over a 365.25-day year (365.25 / 12).
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(304375, 0, 0, false, 4);

/// One accrual tier: a years-of-service threshold and its monthly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualTier {
    /// Minimum whole years of service for this tier.
    pub years: i32,
    /// Leave hours earned per month at this tier.
    pub hours_per_month: Decimal,
}

/// An ascending table of accrual tiers.
///
/// The default table matches the product's policy: 10 hours/month from
/// hire, 12 from 4 years of service, 14 from 9 years.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use leave_engine::calculation::AccrualTable;
///
/// let table = AccrualTable::default();
/// assert_eq!(table.monthly_rate(0), Decimal::new(10, 0));
/// assert_eq!(table.monthly_rate(4), Decimal::new(12, 0));
/// assert_eq!(table.monthly_rate(20), Decimal::new(14, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualTable {
    tiers: Vec<AccrualTier>,
}

impl Default for AccrualTable {
    fn default() -> Self {
        Self::new(vec![
            AccrualTier {
                years: 0,
                hours_per_month: Decimal::new(10, 0),
            },
            AccrualTier {
                years: 4,
                hours_per_month: Decimal::new(12, 0),
            },
            AccrualTier {
                years: 9,
                hours_per_month: Decimal::new(14, 0),
            },
        ])
    }
}

impl AccrualTable {
    /// Creates a table from tiers, sorting them by ascending threshold.
    pub fn new(tiers: Vec<AccrualTier>) -> Self {
        let mut tiers = tiers;
        tiers.sort_by_key(|t| t.years);
        Self { tiers }
    }

    /// Returns the tiers in ascending threshold order.
    pub fn tiers(&self) -> &[AccrualTier] {
        &self.tiers
    }

    /// Selects the monthly rate for a years-of-service figure.
    ///
    /// Picks the highest tier whose threshold does not exceed the input;
    /// falls back to the lowest tier when none match (a new hire, or a
    /// negative years figure from an as-of date before the service start).
    pub fn monthly_rate(&self, years_of_service: i32) -> Decimal {
        self.tiers
            .iter()
            .rev()
            .find(|t| years_of_service >= t.years)
            .or_else(|| self.tiers.first())
            .map(|t| t.hours_per_month)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Whole years of service at `as_of`, by calendar-anniversary semantics.
///
/// The year difference is decremented by one when the month/day anniversary
/// has not yet occurred in the `as_of` year. An `as_of` before the service
/// start yields a negative figure; callers treat that as the lowest tier.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::calculation::years_of_service;
///
/// let start = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
/// let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// let on = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(years_of_service(start, before), 3);
/// assert_eq!(years_of_service(start, on), 4);
/// ```
pub fn years_of_service(service_start: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - service_start.year();

    let anniversary_pending = (as_of.month(), as_of.day()) < (service_start.month(), service_start.day());
    if anniversary_pending {
        years -= 1;
    }

    years
}

/// Leave hours accrued over `[range_start, range_end]` inclusive.
///
/// The monthly rate applicable at `range_start` is converted to a daily
/// rate via [`DAYS_PER_MONTH`], multiplied by the inclusive day count, and
/// rounded to 2 decimal places. Returns 0 for an inverted range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_engine::calculation::{AccrualTable, accrual_for_range};
///
/// // 4 years of service => 12 hours/month; one week accrues ~2.76 hours
/// let accrued = accrual_for_range(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
///     &AccrualTable::default(),
/// );
/// assert_eq!(accrued, Decimal::new(276, 2));
/// ```
pub fn accrual_for_range(
    service_start: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
    table: &AccrualTable,
) -> Decimal {
    if range_end < range_start {
        return Decimal::ZERO;
    }

    let days = Decimal::from((range_end - range_start).num_days() + 1);
    let monthly_rate = table.monthly_rate(years_of_service(service_start, range_start));
    let daily_rate = monthly_rate / DAYS_PER_MONTH;

    (daily_rate * days).round_dp(2)
}
