//! Germination and harvest period inference from a vegetation-index series.
//!
//! The heuristic smooths the series with a trailing moving average, takes the
//! day-over-day change of the smoothed signal, and labels every point where
//! the smoothed index sits below `index_threshold` while changing slowly:
//!
//! - **Harvest**: smoothed < `index_threshold`, `|delta| <= delta_threshold`, delta < 0
//! - **Germination**: smoothed < `index_threshold`, `|delta| < delta_threshold`, delta > 0
//!
//! The harvest rule compares the delta magnitude non-strictly while the
//! germination rule is strict. Both are kept exactly as stated; a delta equal
//! to `delta_threshold` therefore labels a falling point but not a rising one.

use super::runs::{label_runs, GrowthPeriod};
use crate::core::NdviSeries;
use crate::error::{PhenologyError, Result};
use crate::transform::{difference, rolling_mean};
use chrono::NaiveDate;
use std::fmt;

/// Default smoothed-index ceiling below which points may be labeled.
pub const DEFAULT_INDEX_THRESHOLD: f64 = 0.15;
/// Default ceiling on the day-over-day change of the smoothed index.
pub const DEFAULT_DELTA_THRESHOLD: f64 = 0.10;
/// Default moving-average window.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 3;

/// Per-observation period label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeriodLabel {
    /// Not part of a germination or harvest period.
    #[default]
    None,
    /// Low, rising index.
    Germination,
    /// Low, falling index.
    Harvest,
}

impl PeriodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodLabel::None => "none",
            PeriodLabel::Germination => "germination",
            PeriodLabel::Harvest => "harvest",
        }
    }

    pub fn is_labeled(&self) -> bool {
        !matches!(self, PeriodLabel::None)
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for growth period detection.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPeriodConfig {
    /// Smoothed index must be strictly below this value to be labeled.
    pub index_threshold: f64,
    /// Ceiling on the magnitude of the smoothed day-over-day change.
    pub delta_threshold: f64,
    /// Number of consecutive observations averaged before differencing.
    pub smoothing_window: usize,
}

impl Default for GrowthPeriodConfig {
    fn default() -> Self {
        Self {
            index_threshold: DEFAULT_INDEX_THRESHOLD,
            delta_threshold: DEFAULT_DELTA_THRESHOLD,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

impl GrowthPeriodConfig {
    /// Set the index threshold.
    pub fn index_threshold(mut self, threshold: f64) -> Self {
        self.index_threshold = threshold;
        self
    }

    /// Set the delta threshold.
    pub fn delta_threshold(mut self, threshold: f64) -> Self {
        self.delta_threshold = threshold;
        self
    }

    /// Set the smoothing window.
    pub fn smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if self.smoothing_window == 0 {
            return Err(PhenologyError::InvalidParameter(
                "smoothing_window must be >= 1".to_string(),
            ));
        }
        if !self.index_threshold.is_finite() {
            return Err(PhenologyError::InvalidParameter(format!(
                "index_threshold must be finite, got {}",
                self.index_threshold
            )));
        }
        if !self.delta_threshold.is_finite() || self.delta_threshold < 0.0 {
            return Err(PhenologyError::InvalidParameter(format!(
                "delta_threshold must be finite and non-negative, got {}",
                self.delta_threshold
            )));
        }
        Ok(())
    }
}

/// Derived signals and labels, aligned with the input values.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthSignals {
    /// Trailing moving average; `None` for the first `window - 1` points.
    pub smoothed: Vec<Option<f64>>,
    /// First difference of `smoothed`; `None` for the first `window` points.
    pub delta: Vec<Option<f64>>,
    /// Label per observation.
    pub labels: Vec<PeriodLabel>,
    /// Index threshold the labels were computed with.
    pub index_threshold: f64,
}

impl GrowthSignals {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Indices carrying `label`.
    pub fn indices_of(&self, label: PeriodLabel) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == label)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn germination_indices(&self) -> Vec<usize> {
        self.indices_of(PeriodLabel::Germination)
    }

    pub fn harvest_indices(&self) -> Vec<usize> {
        self.indices_of(PeriodLabel::Harvest)
    }

    pub fn label_count(&self, label: PeriodLabel) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// Marker series holding `index_threshold` wherever `label` was assigned.
    ///
    /// The marker carries the threshold constant rather than the observed
    /// value, so plotted markers sit on the threshold line.
    pub fn markers(&self, label: PeriodLabel) -> Vec<Option<f64>> {
        self.labels
            .iter()
            .map(|&l| (l == label).then_some(self.index_threshold))
            .collect()
    }

    pub fn germination_markers(&self) -> Vec<Option<f64>> {
        self.markers(PeriodLabel::Germination)
    }

    pub fn harvest_markers(&self) -> Vec<Option<f64>> {
        self.markers(PeriodLabel::Harvest)
    }
}

/// Result of growth period detection over a dated series.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPeriodResult {
    /// Observation dates.
    pub dates: Vec<NaiveDate>,
    /// Observed index values.
    pub values: Vec<f64>,
    /// Smoothed signal, deltas and labels.
    pub signals: GrowthSignals,
}

impl GrowthPeriodResult {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn labels(&self) -> &[PeriodLabel] {
        &self.signals.labels
    }

    pub fn smoothed(&self) -> &[Option<f64>] {
        &self.signals.smoothed
    }

    pub fn delta(&self) -> &[Option<f64>] {
        &self.signals.delta
    }

    pub fn germination_indices(&self) -> Vec<usize> {
        self.signals.germination_indices()
    }

    pub fn harvest_indices(&self) -> Vec<usize> {
        self.signals.harvest_indices()
    }

    pub fn label_count(&self, label: PeriodLabel) -> usize {
        self.signals.label_count(label)
    }

    pub fn germination_markers(&self) -> Vec<Option<f64>> {
        self.signals.germination_markers()
    }

    pub fn harvest_markers(&self) -> Vec<Option<f64>> {
        self.signals.harvest_markers()
    }

    /// The input rows with their label attached.
    pub fn annotated(&self) -> Vec<(NaiveDate, f64, PeriodLabel)> {
        self.dates
            .iter()
            .zip(&self.values)
            .zip(&self.signals.labels)
            .map(|((&d, &v), &l)| (d, v, l))
            .collect()
    }

    /// Contiguous runs of `label` lasting at least `min_run` observations.
    ///
    /// The detector itself labels points independently; use this to turn
    /// those points into dated periods.
    pub fn periods(&self, label: PeriodLabel, min_run: usize) -> Vec<GrowthPeriod> {
        label_runs(&self.signals.labels, label, min_run)
            .into_iter()
            .map(|run| GrowthPeriod {
                label,
                start_date: self.dates[run.start],
                end_date: self.dates[run.end],
                run,
            })
            .collect()
    }
}

/// Label one point from its smoothed value and delta.
pub fn classify_point(smoothed: f64, delta: f64, config: &GrowthPeriodConfig) -> PeriodLabel {
    if smoothed >= config.index_threshold {
        return PeriodLabel::None;
    }

    let magnitude = delta.abs();
    if delta < 0.0 && magnitude <= config.delta_threshold {
        PeriodLabel::Harvest
    } else if delta > 0.0 && magnitude < config.delta_threshold {
        PeriodLabel::Germination
    } else {
        PeriodLabel::None
    }
}

/// Detect growth periods over raw index values.
///
/// Values must be non-empty and finite. Positions before the smoothing window
/// has filled and its first difference exists are never labeled.
pub fn detect_growth_periods_values(
    values: &[f64],
    config: &GrowthPeriodConfig,
) -> Result<GrowthSignals> {
    config.validate()?;
    if values.is_empty() {
        return Err(PhenologyError::EmptyData);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(PhenologyError::NonFiniteValue { index });
    }

    let smoothed = rolling_mean(values, config.smoothing_window);
    let delta = difference(&smoothed);

    let labels: Vec<PeriodLabel> = smoothed
        .iter()
        .zip(&delta)
        .map(|(s, d)| match (s, d) {
            (Some(s), Some(d)) => classify_point(*s, *d, config),
            _ => PeriodLabel::None,
        })
        .collect();

    let signals = GrowthSignals {
        smoothed,
        delta,
        labels,
        index_threshold: config.index_threshold,
    };

    tracing::debug!(
        observations = values.len(),
        window = config.smoothing_window,
        germination = signals.label_count(PeriodLabel::Germination),
        harvest = signals.label_count(PeriodLabel::Harvest),
        "growth periods labeled"
    );

    Ok(signals)
}

/// Detect growth periods over a dated series.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ndvi_phenology::core::NdviSeries;
/// use ndvi_phenology::detection::{detect_growth_periods, GrowthPeriodConfig, PeriodLabel};
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let series = NdviSeries::daily(
///     start,
///     vec![0.5, 0.4, 0.3, 0.2, 0.14, 0.13, 0.12, 0.14, 0.16],
/// )
/// .unwrap();
///
/// let result = detect_growth_periods(&series, &GrowthPeriodConfig::default()).unwrap();
/// assert_eq!(result.labels()[6], PeriodLabel::Harvest);
/// assert_eq!(result.labels()[8], PeriodLabel::Germination);
/// ```
pub fn detect_growth_periods(
    series: &NdviSeries,
    config: &GrowthPeriodConfig,
) -> Result<GrowthPeriodResult> {
    let signals = detect_growth_periods_values(series.values(), config)?;
    Ok(GrowthPeriodResult {
        dates: series.dates().to_vec(),
        values: series.values().to_vec(),
        signals,
    })
}
