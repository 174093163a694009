//! Growth period detection for vegetation-index series.
//!
//! This module provides:
//! - Per-point germination/harvest labeling
//! - Grouping of labels into contiguous, dated periods

mod growth_period;
mod runs;

pub use growth_period::{
    classify_point, detect_growth_periods, detect_growth_periods_values, GrowthPeriodConfig,
    GrowthPeriodResult, GrowthSignals, PeriodLabel, DEFAULT_DELTA_THRESHOLD,
    DEFAULT_INDEX_THRESHOLD, DEFAULT_SMOOTHING_WINDOW,
};
pub use runs::{label_runs, GrowthPeriod, PeriodRun, DEFAULT_MIN_RUN};
