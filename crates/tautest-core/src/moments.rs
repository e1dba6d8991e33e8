/// Mean and spread of a sample.
///
/// The variance uses Bessel's correction (`n - 1` in the denominator), i.e. it is the
/// unbiased sample variance rather than the population variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleMoments {
    /// Number of values in the sample.
    pub len: usize,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The sample variance (`n - 1` denominator).
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
}

impl SampleMoments {
    /// Computes the moments of `values`.
    ///
    /// # Returns
    ///
    /// * `Some(SampleMoments)` - if the sample contains at least two values
    /// * `None` - otherwise, since the sample variance is undefined
    ///
    /// # Examples
    ///
    /// ```
    /// # use tautest_core::moments::SampleMoments;
    /// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    /// let moments = SampleMoments::from_values(&values).unwrap();
    /// assert_eq!(moments.mean, 5.0);
    /// assert!((moments.variance - 32.0 / 7.0).abs() < 1e-12);
    /// assert!(SampleMoments::from_values(&[1.0]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let len = values.len();
        if len < 2 {
            return None;
        }
        let n = len as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(Self {
            len,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Absolute deviation of `value` from the mean, in units of standard deviation.
    ///
    /// Returns `None` for a degenerate sample whose standard deviation is zero.
    #[must_use]
    pub fn standardized_deviation(&self, value: f64) -> Option<f64> {
        (self.std_dev > 0.0).then(|| (value - self.mean).abs() / self.std_dev)
    }
}
