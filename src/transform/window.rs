//! Trailing window and differencing functions.
//!
//! Outputs stay aligned with their input: positions that cannot be computed
//! are `None` rather than being dropped.

/// Compute the trailing rolling mean (moving average).
///
/// Element `i` is the mean of `series[i + 1 - window..=i]`. The first
/// `window - 1` positions are `None`. A window of zero yields all `None`.
///
/// # Arguments
/// * `series` - Input series
/// * `window` - Window size
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = series.len();
    if window == 0 {
        return vec![None; n];
    }

    let mut result = vec![None; n];
    for i in (window - 1)..n {
        let sum: f64 = series[i + 1 - window..=i].iter().sum();
        result[i] = Some(sum / window as f64);
    }

    result
}

/// First difference of a partially defined series.
///
/// Element `i` is `series[i] - series[i - 1]` when both operands are defined,
/// otherwise `None`. The first element is always `None`.
pub fn difference(series: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut result = Vec::with_capacity(series.len());
    if series.is_empty() {
        return result;
    }

    result.push(None);
    result.extend(series.windows(2).map(|w| match (w[0], w[1]) {
        (Some(prev), Some(curr)) => Some(curr - prev),
        _ => None,
    }));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== rolling_mean ====================

    #[test]
    fn rolling_mean_basic() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_mean(&series, 3);

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_relative_eq!(result[2].unwrap(), 2.0, epsilon = 1e-10); // (1+2+3)/3
        assert_relative_eq!(result[3].unwrap(), 3.0, epsilon = 1e-10); // (2+3+4)/3
        assert_relative_eq!(result[4].unwrap(), 4.0, epsilon = 1e-10); // (3+4+5)/3
    }

    #[test]
    fn rolling_mean_window_1() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_mean(&series, 1);

        for (i, &x) in series.iter().enumerate() {
            assert_relative_eq!(result[i].unwrap(), x, epsilon = 1e-10);
        }
    }

    #[test]
    fn rolling_mean_empty() {
        assert!(rolling_mean(&[], 3).is_empty());
    }

    #[test]
    fn rolling_mean_window_longer_than_series() {
        let result = rolling_mean(&[0.2, 0.3], 3);
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn rolling_mean_window_zero() {
        let result = rolling_mean(&[0.2, 0.3], 0);
        assert_eq!(result, vec![None, None]);
    }

    // ==================== difference ====================

    #[test]
    fn difference_basic() {
        let smoothed = vec![None, None, Some(2.0), Some(3.5), Some(3.0)];
        let result = difference(&smoothed);

        assert_eq!(result.len(), smoothed.len());
        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert!(result[2].is_none());
        assert_relative_eq!(result[3].unwrap(), 1.5, epsilon = 1e-10);
        assert_relative_eq!(result[4].unwrap(), -0.5, epsilon = 1e-10);
    }

    #[test]
    fn difference_empty() {
        assert!(difference(&[]).is_empty());
    }

    #[test]
    fn difference_of_constant_is_zero() {
        let result = difference(&rolling_mean(&[0.4; 6], 3));
        for d in result.iter().skip(3) {
            assert_eq!(*d, Some(0.0));
        }
    }
}
