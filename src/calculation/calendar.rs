//! Calendar/date kernel.
//!
//! Canonical `YYYY-MM-DD` parsing and formatting, Monday-start week
//! boundaries, week enumeration over a range, and ISO week numbering.
//! Everything else in the engine builds on these primitives.
//!
//! All dates are [`chrono::NaiveDate`] values: a date string's
//! year/month/day map directly to a local-calendar date with no timezone
//! conversion.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};

/// Parses a canonical `YYYY-MM-DD` string into a date.
///
/// Single-digit months and days are tolerated (`2023-1-1`), matching the
/// lenient fallback path of the product this engine models.
///
/// # Errors
///
/// Returns [`EngineError::MalformedDate`] when the string is not
/// decomposable into three positive integers forming a plausible date.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::parse_date;
///
/// let date = parse_date("2026-06-05").unwrap();
/// assert_eq!(date.to_string(), "2026-06-05");
///
/// assert!(parse_date("2026-13-01").is_err());
/// assert!(parse_date("not a date").is_err());
/// ```
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    let malformed = || EngineError::MalformedDate {
        input: input.to_string(),
    };

    let mut parts = input.split('-');
    let year: i32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .filter(|y| *y > 0)
        .ok_or_else(malformed)?;
    let month: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .filter(|m| *m > 0)
        .ok_or_else(malformed)?;
    let day: u32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .filter(|d| *d > 0)
        .ok_or_else(malformed)?;

    if parts.next().is_some() {
        return Err(malformed());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Formats a date as `YYYY-MM-DD`, the exact inverse of [`parse_date`].
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    date - Days::new(days_from_monday)
}

/// Returns the Sunday of the week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Days::new(6)
}

/// Enumerates the Monday week-start of every week touching `[start, end]`.
///
/// The first element is the Monday of the week containing `start`; the last
/// is the Monday of the week containing `end`. A range within a single week
/// yields exactly one Monday; an inverted range yields nothing.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{parse_date, weeks_in_range};
///
/// let weeks = weeks_in_range(
///     parse_date("2024-01-08").unwrap(),
///     parse_date("2024-01-21").unwrap(),
/// );
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[0].to_string(), "2024-01-08");
/// assert_eq!(weeks[1].to_string(), "2024-01-15");
/// ```
pub fn weeks_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut weeks = Vec::new();
    let mut current = week_start(start);
    let last = week_start(end);

    while current <= last {
        weeks.push(current);
        current = current + Days::new(7);
    }

    weeks
}

/// Iterates every date in `[start, end]` inclusive. Empty when `start > end`.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Returns the ISO 8601 week number of a date.
///
/// Uses the "week containing the year's first Thursday is week 1" rule. The
/// week number is paired with an ISO year that can differ from the calendar
/// year at year boundaries: 2027-01-01 is a Friday and belongs to week 53 of
/// ISO year 2026. `chrono`'s `iso_week` implements the rule exactly, so the
/// year-boundary case needs no special-casing here.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{iso_week_number, parse_date};
///
/// assert_eq!(iso_week_number(parse_date("2027-01-01").unwrap()), 53);
/// ```
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
