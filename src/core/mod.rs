//! Core data structures for vegetation-index series.

mod series;

pub use series::{NdviSeries, NdviSeriesBuilder, Observation};
