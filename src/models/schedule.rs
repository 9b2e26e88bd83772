//! Work-schedule model types.
//!
//! This module defines the two supported schedule variants: the five-day
//! 8-hour week ("5/40") and the nine-day two-week compressed schedule
//! ("9/80") with an alternating non-work Friday (RDO) on one fixed
//! ISO-week parity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The schedule variant an employee works under.
///
/// # Example
///
/// ```
/// use leave_engine::models::ScheduleType;
///
/// let json = serde_json::to_string(&ScheduleType::NineEighty).unwrap();
/// assert_eq!(json, "\"9/80\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleType {
    /// Five 8-hour days per week, 40 hours per week.
    #[serde(rename = "5/40")]
    FiveForty,
    /// Nine days per two-week period, 80 hours: 9-hour weekdays, one
    /// 8-hour Friday, and one RDO Friday.
    #[serde(rename = "9/80")]
    NineEighty,
}

impl std::fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleType::FiveForty => write!(f, "5/40"),
            ScheduleType::NineEighty => write!(f, "9/80"),
        }
    }
}

impl FromStr for ScheduleType {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "5/40" => Ok(ScheduleType::FiveForty),
            "9/80" => Ok(ScheduleType::NineEighty),
            other => Err(EngineError::InvalidSchedule {
                value: other.to_string(),
                message: "unknown schedule type (expected '5/40' or '9/80')".to_string(),
            }),
        }
    }
}

/// Which ISO-week parity carries the RDO Friday on a 9/80 schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RdoPattern {
    /// RDO Fridays fall on even-numbered ISO weeks.
    EvenFridays,
    /// RDO Fridays fall on odd-numbered ISO weeks.
    OddFridays,
}

impl std::fmt::Display for RdoPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RdoPattern::EvenFridays => write!(f, "even-fridays"),
            RdoPattern::OddFridays => write!(f, "odd-fridays"),
        }
    }
}

impl FromStr for RdoPattern {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "even-fridays" => Ok(RdoPattern::EvenFridays),
            "odd-fridays" => Ok(RdoPattern::OddFridays),
            other => Err(EngineError::InvalidSchedule {
                value: other.to_string(),
                message: "unknown RDO pattern (expected 'even-fridays' or 'odd-fridays')"
                    .to_string(),
            }),
        }
    }
}

/// A complete work-schedule configuration.
///
/// Immutable once constructed for a given projection run. The RDO pattern
/// is only meaningful for the 9/80 schedule; a 9/80 schedule without a
/// pattern behaves as if every Friday were an 8-hour work day.
///
/// # Example
///
/// ```
/// use leave_engine::models::{RdoPattern, ScheduleType, WorkSchedule};
///
/// let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
/// assert_eq!(schedule.schedule_type, ScheduleType::NineEighty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// The schedule variant.
    #[serde(rename = "type")]
    pub schedule_type: ScheduleType,
    /// The RDO parity, present only for 9/80 schedules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdo_pattern: Option<RdoPattern>,
}

impl WorkSchedule {
    /// Creates a standard five-day 8-hour schedule.
    pub fn five_forty() -> Self {
        Self {
            schedule_type: ScheduleType::FiveForty,
            rdo_pattern: None,
        }
    }

    /// Creates a 9/80 schedule with the given RDO Friday parity.
    pub fn nine_eighty(pattern: RdoPattern) -> Self {
        Self {
            schedule_type: ScheduleType::NineEighty,
            rdo_pattern: Some(pattern),
        }
    }

    /// The length of a standard work day under this schedule, in hours.
    ///
    /// 9 for the 9/80 schedule, 8 for 5/40. Used by the recommender to
    /// convert an absence cost in hours into equivalent work days.
    pub fn standard_day_hours(&self) -> u32 {
        match self.schedule_type {
            ScheduleType::FiveForty => 8,
            ScheduleType::NineEighty => 9,
        }
    }
}
