//! Configuration loading and management for the leave engine.
//!
//! This module provides functionality to load the holiday calendar and
//! accrual policy from YAML files, and to enrich raw holiday entries with
//! schedule-specific hours.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave").unwrap();
//! println!("Calendar version: {}", config.calendar_version());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualPolicy, HolidayCalendar, HolidayEntry, ScheduleApplicability};
