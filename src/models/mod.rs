//! Data models for the Leave Forecast Engine.
//!
//! This module contains the input types supplied by the persistence layer
//! (profile, schedule, holidays, planned absences) and the derived output
//! types recomputed on every projection run (weekly ledger entries, annual
//! summaries, recommendations).

mod absence;
mod holiday;
mod ledger;
mod profile;
mod recommendation;
mod schedule;

pub use absence::PlannedAbsence;
pub use holiday::Holiday;
pub use ledger::{AnnualSummary, WeeklyLedgerEntry};
pub use profile::Profile;
pub use recommendation::{FreeDayBreakdown, Recommendation};
pub use schedule::{RdoPattern, ScheduleType, WorkSchedule};
