//! Series transformations used ahead of period detection.
//!
//! # Example
//!
//! ```
//! use ndvi_phenology::transform::{difference, rolling_mean};
//!
//! let series = vec![0.5, 0.4, 0.3, 0.2];
//!
//! // Trailing moving average with window 3
//! let smoothed = rolling_mean(&series, 3);
//! assert_eq!(smoothed[0], None);
//!
//! // Day-over-day change of the smoothed signal
//! let delta = difference(&smoothed);
//! assert_eq!(delta.len(), series.len());
//! ```

pub mod window;

pub use window::{difference, rolling_mean};
