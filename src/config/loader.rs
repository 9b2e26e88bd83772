//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the holiday
//! calendar and accrual policy from YAML files.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::calculation::{AccrualTable, work_hours_for_day};
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, WorkSchedule};

use super::types::{AccrualPolicy, HolidayCalendar};

/// Loads and provides access to the leave-policy configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides schedule-aware holiday queries: raw calendar entries carry no
/// hours, so every query enriches them with the hours the asking schedule
/// would have worked that day (a holiday landing on an RDO or weekend
/// credits nothing).
///
/// # Directory Structure
///
/// ```text
/// config/leave/
/// ├── holidays.yaml   # Year-indexed holiday calendar
/// └── accrual.yaml    # Years-of-service accrual tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::WorkSchedule;
///
/// let loader = ConfigLoader::load("./config/leave").unwrap();
///
/// let schedule = WorkSchedule::five_forty();
/// let holidays = loader.holidays_for_year_range(2026, 2026, &schedule);
/// println!("{} holidays in 2026", holidays.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    calendar: HolidayCalendar,
    accrual_table: AccrualTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/leave")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar = Self::load_yaml::<HolidayCalendar>(&path.join("holidays.yaml"))?;
        let policy = Self::load_yaml::<AccrualPolicy>(&path.join("accrual.yaml"))?;

        Ok(Self {
            calendar,
            accrual_table: AccrualTable::new(policy.tiers),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the holiday calendar's version string.
    pub fn calendar_version(&self) -> &str {
        &self.calendar.version
    }

    /// Returns the accrual table loaded from `accrual.yaml`.
    pub fn accrual_table(&self) -> &AccrualTable {
        &self.accrual_table
    }

    /// All years the holiday calendar covers, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        self.calendar.holidays.keys().copied().collect()
    }

    /// Holidays observed under `schedule` across `[start_year, end_year]`.
    ///
    /// Entries restricted to the other schedule are dropped; the rest are
    /// enriched with that schedule's hours for the date.
    pub fn holidays_for_year_range(
        &self,
        start_year: i32,
        end_year: i32,
        schedule: &WorkSchedule,
    ) -> Vec<Holiday> {
        self.calendar
            .holidays
            .range(start_year..=end_year)
            .flat_map(|(_, entries)| entries.iter())
            .filter(|entry| entry.schedules.applies_to(schedule.schedule_type))
            .map(|entry| Holiday {
                name: entry.name.clone(),
                date: entry.date,
                hours: work_hours_for_day(entry.date, schedule),
            })
            .collect()
    }

    /// Holidays observed under `schedule` with dates in `[start, end]`.
    pub fn holidays_for_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        schedule: &WorkSchedule,
    ) -> Vec<Holiday> {
        self.holidays_for_year_range(start.year(), end.year(), schedule)
            .into_iter()
            .filter(|h| h.date >= start && h.date <= end)
            .collect()
    }
}
