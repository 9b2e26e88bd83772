//! Employee profile model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkSchedule;

/// An employee's leave profile: the baseline from which every projection runs.
///
/// The `balance_as_of` date is the date at which `current_balance` was known
/// to be accurate; the ledger never credits accrual for weeks starting before
/// it. `balance_as_of >= service_start` is expected but not enforced here
/// (validation is the persistence layer's job); the engine behaves
/// deterministically on any input.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use leave_engine::models::{Profile, WorkSchedule};
///
/// let profile = Profile {
///     service_start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     current_balance: Decimal::new(100, 0),
///     balance_as_of: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     schedule: WorkSchedule::five_forty(),
///     personal_day_used: false,
/// };
/// assert_eq!(profile.current_balance, Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// The employee's first day of service; drives years-of-service tiers.
    pub service_start: NaiveDate,
    /// The known leave balance in hours, signed. Negative values represent
    /// over-commitment and are preserved by the ledger.
    pub current_balance: Decimal,
    /// The date `current_balance` was measured as of.
    pub balance_as_of: NaiveDate,
    /// The work schedule the employee is on.
    pub schedule: WorkSchedule,
    /// Whether the annual personal-day credit for the as-of year was already
    /// consumed before the as-of date.
    #[serde(default)]
    pub personal_day_used: bool,
}
