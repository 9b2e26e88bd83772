//! Vacation recommendation engine.
//!
//! Enumerates candidate absence windows anchored on holidays, RDO Fridays,
//! and ordinary Fridays/Mondays, prices each with the authoritative
//! absence-cost function, scores them, deduplicates, drops windows that
//! collide with existing absences, and returns the top-ranked results.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::models::{Holiday, PlannedAbsence, Recommendation, WorkSchedule};

use super::calendar::dates_in_range;
use super::intervals::AbsenceIndex;
use super::scoring::{composite_score, context_for, count_free_days, efficiency_for, is_bracketed};
use super::work_schedule::{hours_for_absence_range, is_rdo};

/// Longest window, in extension days, grown forward or backward from an
/// anchor.
const MAX_EXTENSION_DAYS: u64 = 14;

/// Longest extension on each side of a straddling window (9 + 9 + 1 = up
/// to 19 total days).
const MAX_STRADDLE_DAYS: u64 = 9;

/// Parameters for one recommendation search.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest<'a> {
    /// The schedule candidate costs are priced against.
    pub schedule: &'a WorkSchedule,
    /// Schedule-enriched holidays inside (or near) the search range.
    pub holidays: &'a [Holiday],
    /// First date anchors are drawn from.
    pub search_start: NaiveDate,
    /// Last date anchors are drawn from, inclusive.
    pub search_end: NaiveDate,
    /// Current date; candidates starting before it are discarded.
    pub today: NaiveDate,
    /// Already-planned absences; overlapping candidates are dropped.
    pub existing: &'a [PlannedAbsence],
    /// Maximum number of ranked results to return.
    pub max_results: usize,
    /// Minimum efficiency for a candidate to be considered at all.
    pub min_efficiency: f64,
}

impl<'a> RecommendationRequest<'a> {
    /// Creates a request with the product defaults: top 10 results, a
    /// 1.5x minimum efficiency.
    pub fn new(
        schedule: &'a WorkSchedule,
        holidays: &'a [Holiday],
        search_start: NaiveDate,
        search_end: NaiveDate,
        today: NaiveDate,
        existing: &'a [PlannedAbsence],
    ) -> Self {
        Self {
            schedule,
            holidays,
            search_start,
            search_end,
            today,
            existing,
            max_results: 10,
            min_efficiency: 1.5,
        }
    }
}

/// Every anchor worth growing a window around: in-range holidays, RDO
/// Fridays, and all Fridays and Mondays (ordinary long weekends).
fn anchor_dates(request: &RecommendationRequest<'_>) -> Vec<NaiveDate> {
    let mut anchors: Vec<NaiveDate> = request
        .holidays
        .iter()
        .map(|h| h.date)
        .filter(|d| *d >= request.search_start && *d <= request.search_end)
        .collect();

    for date in dates_in_range(request.search_start, request.search_end) {
        if is_rdo(date, request.schedule)
            || matches!(date.weekday(), Weekday::Fri | Weekday::Mon)
        {
            anchors.push(date);
        }
    }

    anchors
}

/// Prices and scores one `[start, end]` window, or rejects it below the
/// efficiency threshold.
fn evaluate_window(
    start: NaiveDate,
    end: NaiveDate,
    request: &RecommendationRequest<'_>,
    holiday_dates: &HashSet<NaiveDate>,
    holiday_names: &HashMap<NaiveDate, String>,
) -> Option<Recommendation> {
    let cost = hours_for_absence_range(start, end, request.schedule, request.holidays);
    let total_days = (end - start).num_days() as u32 + 1;

    let efficiency = efficiency_for(total_days, cost, request.schedule);
    if efficiency < request.min_efficiency {
        return None;
    }

    let bracketed = is_bracketed(start, end, request.schedule, holiday_dates);
    let score = composite_score(efficiency, bracketed, total_days, cost);
    let free_days = count_free_days(start, end, request.schedule, holiday_dates);
    let context = context_for(start, end, &free_days, holiday_names);

    Some(Recommendation {
        start,
        end,
        total_days,
        hours_required: cost,
        efficiency,
        score,
        is_bracketed: bracketed,
        free_days,
        context,
    })
}

/// Generates the three window shapes around one anchor: ending at it,
/// starting at it, and straddling it.
fn windows_around_anchor(
    anchor: NaiveDate,
    request: &RecommendationRequest<'_>,
    holiday_dates: &HashSet<NaiveDate>,
    holiday_names: &HashMap<NaiveDate, String>,
    out: &mut Vec<Recommendation>,
) {
    // Extend backward: the window ends at the anchor.
    for days_before in 1..=MAX_EXTENSION_DAYS {
        let start = anchor - Days::new(days_before);
        if start < request.today {
            continue;
        }
        out.extend(evaluate_window(start, anchor, request, holiday_dates, holiday_names));
    }

    // Extend forward: the window starts at the anchor.
    if anchor >= request.today {
        for days_after in 1..=MAX_EXTENSION_DAYS {
            let end = anchor + Days::new(days_after);
            out.extend(evaluate_window(anchor, end, request, holiday_dates, holiday_names));
        }
    }

    // Straddle the anchor on both sides.
    for days_before in 1..=MAX_STRADDLE_DAYS {
        let start = anchor - Days::new(days_before);
        if start < request.today {
            continue;
        }
        for days_after in 1..=MAX_STRADDLE_DAYS {
            let end = anchor + Days::new(days_after);
            out.extend(evaluate_window(start, end, request, holiday_dates, holiday_names));
        }
    }
}

/// Searches the calendar for high-value vacation windows and ranks them.
///
/// Candidates sharing the same `(start, end)` are collapsed to the
/// highest-scoring one (several anchors can generate the same window);
/// candidates intersecting an existing absence are dropped; the survivors
/// are ranked descending by composite score with a start-date/end-date
/// tie-break for reproducible output, then truncated to
/// `request.max_results`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::calculation::{RecommendationRequest, recommend_vacations};
/// use leave_engine::models::{RdoPattern, WorkSchedule};
///
/// let schedule = WorkSchedule::nine_eighty(RdoPattern::OddFridays);
/// let request = RecommendationRequest::new(
///     &schedule,
///     &[],
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     &[],
/// );
///
/// let recommendations = recommend_vacations(&request);
/// assert!(recommendations.len() <= 10);
/// ```
pub fn recommend_vacations(request: &RecommendationRequest<'_>) -> Vec<Recommendation> {
    let holiday_dates: HashSet<NaiveDate> = request.holidays.iter().map(|h| h.date).collect();
    let holiday_names: HashMap<NaiveDate, String> = request
        .holidays
        .iter()
        .map(|h| (h.date, h.name.clone()))
        .collect();

    let anchors = anchor_dates(request);
    debug!(anchors = anchors.len(), "recommendation search anchors");

    let mut candidates = Vec::new();
    for anchor in anchors {
        windows_around_anchor(anchor, request, &holiday_dates, &holiday_names, &mut candidates);
    }
    debug!(candidates = candidates.len(), "raw candidate windows");

    // Collapse duplicates, keeping the best score per (start, end).
    let mut unique: HashMap<(NaiveDate, NaiveDate), Recommendation> = HashMap::new();
    for candidate in candidates {
        let key = (candidate.start, candidate.end);
        match unique.get(&key) {
            Some(existing) if existing.score >= candidate.score => {}
            _ => {
                unique.insert(key, candidate);
            }
        }
    }

    let existing_index = AbsenceIndex::new(request.existing);
    let mut ranked: Vec<Recommendation> = unique
        .into_values()
        .filter(|r| !existing_index.overlaps_range(r.start, r.end))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.end.cmp(&b.end))
    });
    ranked.truncate(request.max_results);

    debug!(results = ranked.len(), "ranked recommendations");
    ranked
}
