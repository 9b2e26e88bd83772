//! Leave Forecast Engine
//!
//! This crate projects an employee's accrued-leave balance forward week by week
//! from a known baseline, given an accrual policy, a work schedule, a holiday
//! calendar, and a set of planned absences. It also searches the calendar for
//! high-value vacation windows and ranks them by a composite score.
//!
//! Every operation is a pure function of its explicit inputs: no I/O (apart
//! from configuration loading), no clock reads, no hidden state. Persistence,
//! authentication, and rendering live in external collaborators.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
