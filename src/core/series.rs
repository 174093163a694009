//! NdviSeries data structure for daily vegetation-index observations.

use crate::error::{PhenologyError, Result};
use chrono::NaiveDate;

/// A single vegetation-index sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A validated, date-ordered vegetation-index series.
///
/// Dates are strictly increasing and every value is finite. Both are checked
/// once at construction so downstream analysis can treat the data as
/// well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct NdviSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

/// Builder for constructing NdviSeries.
#[derive(Debug, Clone, Default)]
pub struct NdviSeriesBuilder {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl NdviSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.dates = dates;
        self
    }

    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    /// Append one observation.
    pub fn observation(mut self, date: NaiveDate, value: f64) -> Self {
        self.dates.push(date);
        self.values.push(value);
        self
    }

    pub fn build(self) -> Result<NdviSeries> {
        NdviSeries::new(self.dates, self.values)
    }
}

impl NdviSeries {
    /// Create a series from parallel date and value vectors.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(PhenologyError::DimensionMismatch {
                expected: dates.len(),
                got: values.len(),
            });
        }
        if dates.is_empty() {
            return Err(PhenologyError::EmptyData);
        }

        for i in 1..dates.len() {
            if dates[i] <= dates[i - 1] {
                tracing::warn!(index = i, date = %dates[i], "rejecting unordered series");
                return Err(PhenologyError::TimestampError(format!(
                    "dates must be strictly increasing: {} follows {}",
                    dates[i],
                    dates[i - 1]
                )));
            }
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            tracing::warn!(index, "rejecting series with non-finite value");
            return Err(PhenologyError::NonFiniteValue { index });
        }

        Ok(Self { dates, values })
    }

    /// Create a series from a list of observations.
    pub fn from_observations(observations: &[Observation]) -> Result<Self> {
        let (dates, values): (Vec<_>, Vec<_>) =
            observations.iter().map(|o| (o.date, o.value)).unzip();
        Self::new(dates, values)
    }

    /// Create a series of consecutive daily observations starting at `start`.
    pub fn daily(start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        let dates = start.iter_days().take(values.len()).collect();
        Self::new(dates, values)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false for a constructed series; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn observations(&self) -> Vec<Observation> {
        self.dates
            .iter()
            .zip(&self.values)
            .map(|(&date, &value)| Observation { date, value })
            .collect()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Extract observations in `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Result<NdviSeries> {
        if start >= end || end > self.len() {
            return Err(PhenologyError::InvalidParameter(format!(
                "invalid slice range {start}..{end} for series of length {}",
                self.len()
            )));
        }
        Ok(Self {
            dates: self.dates[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        })
    }
}
