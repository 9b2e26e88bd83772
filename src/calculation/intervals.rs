//! Absence interval index.
//!
//! A sorted, precomputed view over the planned-absence list that answers
//! "which absence covers this date" and "which absences touch this week"
//! without rescanning the whole list per query. Building the index also
//! detects absences that overlap on the same date — an ambiguous input,
//! surfaced as a logged diagnostic rather than an error, with a documented
//! earliest-ordinal-wins tie-break for cost attribution.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::PlannedAbsence;

/// A precomputed, immutable index over a projection run's absences.
///
/// Absences keep a stable ordinal (their position in the input slice at
/// construction time); whenever two absences cover the same date, the one
/// with the lowest ordinal wins lookups. The index never reorders or
/// deduplicates the underlying data.
#[derive(Debug, Clone)]
pub struct AbsenceIndex {
    /// `(ordinal, absence)` pairs sorted by start date, then ordinal.
    sorted: Vec<(usize, PlannedAbsence)>,
    ambiguous_overlaps: bool,
}

impl AbsenceIndex {
    /// Builds the index, logging an `AmbiguousOverlapWarning` diagnostic for
    /// every pair of absences sharing at least one date.
    pub fn new(absences: &[PlannedAbsence]) -> Self {
        let mut sorted: Vec<(usize, PlannedAbsence)> =
            absences.iter().cloned().enumerate().collect();
        sorted.sort_by_key(|(ordinal, a)| (a.start, *ordinal));

        // Sweep in start order against the furthest-reaching open interval;
        // any overlap must involve it.
        let mut ambiguous_overlaps = false;
        let mut open: Option<(usize, &PlannedAbsence)> = None;
        for (ordinal, absence) in &sorted {
            if let Some((open_ordinal, open_absence)) = open {
                if absence.start <= open_absence.end {
                    ambiguous_overlaps = true;
                    warn!(
                        first = %open_absence.id,
                        second = %absence.id,
                        from = %absence.start,
                        to = %open_absence.end.min(absence.end),
                        "AmbiguousOverlapWarning: planned absences overlap; \
                         cost attribution uses the earlier of ordinals {} and {}",
                        open_ordinal,
                        ordinal,
                    );
                }
            }
            if open.map_or(true, |(_, o)| absence.end > o.end) {
                open = Some((*ordinal, absence));
            }
        }

        Self {
            sorted,
            ambiguous_overlaps,
        }
    }

    /// Whether construction found any two absences sharing a date.
    pub fn has_ambiguous_overlaps(&self) -> bool {
        self.ambiguous_overlaps
    }

    /// The absence covering `date`, earliest ordinal winning on overlap.
    pub fn absence_on(&self, date: NaiveDate) -> Option<&PlannedAbsence> {
        let candidates_end = self.sorted.partition_point(|(_, a)| a.start <= date);
        self.sorted[..candidates_end]
            .iter()
            .filter(|(_, a)| a.end >= date)
            .min_by_key(|(ordinal, _)| *ordinal)
            .map(|(_, a)| a)
    }

    /// All absences intersecting `[start, end]`, in original input order.
    pub fn overlapping(&self, start: NaiveDate, end: NaiveDate) -> Vec<&PlannedAbsence> {
        let candidates_end = self.sorted.partition_point(|(_, a)| a.start <= end);
        let mut hits: Vec<&(usize, PlannedAbsence)> = self.sorted[..candidates_end]
            .iter()
            .filter(|(_, a)| a.end >= start)
            .collect();
        hits.sort_by_key(|(ordinal, _)| *ordinal);
        hits.into_iter().map(|(_, a)| a).collect()
    }

    /// Whether any absence intersects `[start, end]`.
    pub fn overlaps_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let candidates_end = self.sorted.partition_point(|(_, a)| a.start <= end);
        self.sorted[..candidates_end].iter().any(|(_, a)| a.end >= start)
    }
}
