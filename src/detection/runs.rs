//! Grouping of per-point labels into contiguous periods.
//!
//! The detector labels each observation independently. Agronomic periods are
//! usually only trusted once a label persists, so callers can collapse
//! adjacent labels into runs and drop the short ones here.

use super::growth_period::PeriodLabel;
use chrono::NaiveDate;

/// Minimum number of consecutive labeled observations usually required
/// before a run is treated as a real period.
pub const DEFAULT_MIN_RUN: usize = 10;

/// A maximal run of identical labels, as inclusive indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRun {
    pub label: PeriodLabel,
    pub start: usize,
    pub end: usize,
}

impl PeriodRun {
    /// Number of observations in the run.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A run mapped onto observation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPeriod {
    pub label: PeriodLabel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub run: PeriodRun,
}

/// Find maximal runs of `label` that are at least `min_run` long.
///
/// A `min_run` of zero behaves like one.
pub fn label_runs(labels: &[PeriodLabel], label: PeriodLabel, min_run: usize) -> Vec<PeriodRun> {
    let min_run = min_run.max(1);
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &l) in labels.iter().enumerate() {
        match (l == label, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_run {
                    runs.push(PeriodRun {
                        label,
                        start: s,
                        end: i - 1,
                    });
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if labels.len() - s >= min_run {
            runs.push(PeriodRun {
                label,
                start: s,
                end: labels.len() - 1,
            });
        }
    }

    runs
}
