//! # ndvi-phenology
//!
//! Germination and harvest period inference from daily vegetation-index
//! (NDVI) series.
//!
//! A series is smoothed with a trailing moving average, differenced, and each
//! point whose smoothed index sits below a threshold while changing slowly is
//! labeled as germination (rising) or harvest (falling). Helpers are provided
//! for reading series from CSV, writing annotated output, and grouping labels
//! into dated periods.
//!
//! # Example
//!
//! ```
//! use ndvi_phenology::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
//! let series = NdviSeries::daily(start, vec![0.5, 0.4, 0.3, 0.2, 0.14, 0.13, 0.12]).unwrap();
//!
//! let config = GrowthPeriodConfig::default().smoothing_window(3);
//! let result = detect_growth_periods(&series, &config).unwrap();
//! assert_eq!(result.harvest_indices(), vec![6]);
//! ```

pub mod core;
pub mod detection;
pub mod error;
pub mod io;
pub mod logging;
pub mod transform;

pub use error::{PhenologyError, Result};

pub mod prelude {
    pub use crate::core::{NdviSeries, NdviSeriesBuilder, Observation};
    pub use crate::detection::{
        detect_growth_periods, detect_growth_periods_values, GrowthPeriodConfig,
        GrowthPeriodResult, PeriodLabel,
    };
    pub use crate::error::{PhenologyError, Result};
}
