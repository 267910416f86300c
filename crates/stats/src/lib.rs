//! Statistical helpers for FWI summaries.
//!
//! Every summary of an empty sample is `None` ("undefined"), never zero.
//! Missing values are represented by the caller as absent entries, not NaN.

/// The percentile levels reported in every band, in ascending order.
pub const BAND_LEVELS: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

/// Arithmetic mean of a slice. Returns `None` if empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Largest value of a slice. Returns `None` if empty.
pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// Sorts a copy of `data` ascending using the IEEE total order.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Linear-interpolation quantile (R type 7, NumPy's default `linear`).
///
/// **Expects pre-sorted input** (caller's responsibility). `p` is a
/// fraction in `[0, 1]`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Percentile `q` (0..=100) of an unsorted sample. Returns `None` if empty.
pub fn percentile(data: &[f64], q: f64) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(quantile_type7(&sorted(data), q / 100.0))
}

/// The 5th, 25th, 50th, 75th and 95th percentiles of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileBand {
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

impl PercentileBand {
    /// Computes the band of an unsorted sample. Returns `None` if empty.
    pub fn of(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let s = sorted(data);
        let [p5, p25, p50, p75, p95] = BAND_LEVELS.map(|q| quantile_type7(&s, q / 100.0));
        Some(Self {
            p5,
            p25,
            p50,
            p75,
            p95,
        })
    }

    /// Returns the five values in ascending level order.
    pub fn values(&self) -> [f64; 5] {
        [self.p5, self.p25, self.p50, self.p75, self.p95]
    }

    /// Returns `true` when `p5 <= p25 <= p50 <= p75 <= p95`.
    pub fn is_monotonic(&self) -> bool {
        self.values().windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data).unwrap(), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_max() {
        assert_eq!(max(&[3.0, 10.0, 0.0]), Some(10.0));
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn test_quantile_type7() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.25), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quantile_type7_p0() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_p1() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 1.0), 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 1.4, epsilon = 1e-10);
    }

    #[test]
    fn test_quantile_type7_numpy_crossvalidation() {
        // numpy.percentile(range(1, 11), 30) = 3.7
        let sorted: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_relative_eq!(quantile_type7(&sorted, 0.3), 3.7, epsilon = 1e-10);
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let data = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert_relative_eq!(percentile(&data, 50.0).unwrap(), 3.0, epsilon = 1e-10);
        assert_relative_eq!(percentile(&data, 95.0).unwrap(), 4.8, epsilon = 1e-10);
    }

    #[test]
    fn test_percentile_empty_is_undefined() {
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn test_band_constant_sample() {
        let band = PercentileBand::of(&[7.5; 24]).unwrap();
        assert_eq!(band.values(), [7.5; 5]);
    }

    #[test]
    fn test_band_single_value() {
        let band = PercentileBand::of(&[2.0]).unwrap();
        assert_eq!(band.values(), [2.0; 5]);
    }

    #[test]
    fn test_band_numpy_values() {
        // numpy.percentile(range(0, 101), [5, 25, 50, 75, 95])
        let data: Vec<f64> = (0..=100).rev().map(|x| x as f64).collect();
        let band = PercentileBand::of(&data).unwrap();
        assert_relative_eq!(band.p5, 5.0, epsilon = 1e-10);
        assert_relative_eq!(band.p25, 25.0, epsilon = 1e-10);
        assert_relative_eq!(band.p50, 50.0, epsilon = 1e-10);
        assert_relative_eq!(band.p75, 75.0, epsilon = 1e-10);
        assert_relative_eq!(band.p95, 95.0, epsilon = 1e-10);
        assert!(band.is_monotonic());
    }

    #[test]
    fn test_band_empty_is_undefined() {
        assert!(PercentileBand::of(&[]).is_none());
    }
}
