//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calculation::AccrualTier;
use crate::models::ScheduleType;

/// Which work schedules observe a holiday.
///
/// Most holidays apply to everyone; a few calendar entries exist only to
/// mirror how one schedule observes a date the other works through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleApplicability {
    /// Observed under every schedule.
    #[default]
    All,
    /// Observed only under the 9/80 schedule.
    NineEightyOnly,
    /// Observed only under the 5/40 schedule.
    FiveFortyOnly,
}

impl ScheduleApplicability {
    /// Whether a holiday with this applicability is observed under
    /// `schedule_type`.
    pub fn applies_to(self, schedule_type: ScheduleType) -> bool {
        match self {
            Self::All => true,
            Self::NineEightyOnly => schedule_type == ScheduleType::NineEighty,
            Self::FiveFortyOnly => schedule_type == ScheduleType::FiveForty,
        }
    }
}

/// One holiday entry as written in `holidays.yaml`, before schedule
/// enrichment attaches hours.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The holiday's display name.
    pub name: String,
    /// The observed date.
    pub date: NaiveDate,
    /// Which schedules observe this entry.
    #[serde(default)]
    pub schedules: ScheduleApplicability,
}

/// The holiday calendar file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The calendar's version or publication date.
    pub version: String,
    /// Holiday entries indexed by calendar year.
    pub holidays: BTreeMap<i32, Vec<HolidayEntry>>,
}

/// The accrual-policy file structure (`accrual.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AccrualPolicy {
    /// Accrual tiers, ascending by years-of-service threshold.
    pub tiers: Vec<AccrualTier>,
}
