//! Iterative outlier rejection.
//!
//! The driver sorts a working copy of the sample, then repeatedly scans the current
//! window for its most extreme element. Each rejected element is flagged by its
//! position in the *original* sample and dropped from its end of the window. The run
//! stops at the first extreme that falls within the threshold: if the most extreme
//! remaining value is acceptable, so is everything closer to the mean.
//!
//! ```text
//! original:  [10, 10, 9, 11, 10, 100]
//! order:     [ 2,  0, 1,  4,  3,   5]    (original indices sorted by value)
//! window:    lo=0 .. hi=6  -> 100 rejected, flags[5] = true, hi=5
//!            lo=0 .. hi=5  -> 11 accepted, done
//! ```

use crate::{
    scan::{self, End, ScanOutcome},
    strictness::Strictness,
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvaluateError {
    #[display("value at index {index} is not a finite number")]
    NonFiniteValue { index: usize },
}

/// One element removed by the test, in the order it was removed.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rejection {
    /// Position of the element in the original sample.
    pub index: usize,
    pub value: f64,
    pub end: End,
    /// Size of the window the element was rejected from.
    pub sample_len: usize,
    pub delta: f64,
    pub tau: f64,
}

/// Outcome of running the test over a whole sample.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Evaluation {
    strictness: Strictness,
    values: Vec<f64>,
    outliers: Vec<bool>,
    rejections: Vec<Rejection>,
    stop: ScanOutcome,
}

impl Evaluation {
    #[must_use]
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// The evaluated values in their original order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Outlier flags, parallel to [`values`](Self::values).
    #[must_use]
    pub fn outliers(&self) -> &[bool] {
        &self.outliers
    }

    #[must_use]
    pub fn is_outlier(&self, index: usize) -> bool {
        self.outliers.get(index).copied().unwrap_or(false)
    }

    /// Rejected elements in the order the test removed them.
    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// The scan that ended the run.
    #[must_use]
    pub fn stop(&self) -> &ScanOutcome {
        &self.stop
    }

    /// `(value, is_outlier)` pairs in original order.
    pub fn labeled(&self) -> impl Iterator<Item = (f64, bool)> + '_ {
        self.values
            .iter()
            .copied()
            .zip(self.outliers.iter().copied())
    }

    /// Original indices of the outliers, ascending.
    pub fn outlier_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.outliers
            .iter()
            .enumerate()
            .filter_map(|(index, &outlier)| outlier.then_some(index))
    }

    #[must_use]
    pub fn outlier_count(&self) -> usize {
        self.rejections.len()
    }

    /// Values that were not rejected, in original order.
    pub fn inliers(&self) -> impl Iterator<Item = f64> + '_ {
        self.labeled()
            .filter_map(|(value, outlier)| (!outlier).then_some(value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Runs the Modified Thompson Tau Test over `values`.
///
/// Set `is_sorted` when `values` is already in ascending order to skip the internal
/// sort. The flag is trusted; passing unsorted values with it set gives meaningless
/// results (and panics in debug builds).
///
/// Samples with fewer than three values are returned with no outliers.
///
/// # Examples
///
/// ```
/// use tautest_core::{Strictness, evaluate};
///
/// let values = [10.0, 10.0, 9.0, 11.0, 10.0, 100.0];
/// let evaluation = evaluate(&values, Strictness::Confidence95, false).unwrap();
/// assert_eq!(evaluation.outliers(), &[false, false, false, false, false, true]);
/// assert_eq!(evaluation.inliers().collect::<Vec<_>>(), [10.0, 10.0, 9.0, 11.0, 10.0]);
/// ```
pub fn evaluate(
    values: &[f64],
    strictness: Strictness,
    is_sorted: bool,
) -> Result<Evaluation, EvaluateError> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(EvaluateError::NonFiniteValue { index });
    }

    let mut order = (0..values.len()).collect::<Vec<_>>();
    if !is_sorted {
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    }
    let sorted = order.iter().map(|&i| values[i]).collect::<Vec<_>>();

    let mut outliers = vec![false; values.len()];
    let mut rejections = vec![];
    let (mut lo, mut hi) = (0, sorted.len());
    let stop = loop {
        let window = &sorted[lo..hi];
        let outcome = scan::scan(window, strictness);
        let ScanOutcome::Outlier(candidate) = outcome else {
            break outcome;
        };
        let pos = match candidate.end {
            End::First => {
                lo += 1;
                lo - 1
            }
            End::Last => {
                hi -= 1;
                hi
            }
        };
        let index = order[pos];
        outliers[index] = true;
        rejections.push(Rejection {
            index,
            value: candidate.value,
            end: candidate.end,
            sample_len: window.len(),
            delta: candidate.delta,
            tau: candidate.tau,
        });
    };

    Ok(Evaluation {
        strictness,
        values: values.to_vec(),
        outliers,
        rejections,
        stop,
    })
}

/// Reusable test configuration.
///
/// # Examples
///
/// ```
/// use tautest_core::{Strictness, ThompsonTau};
///
/// let test = ThompsonTau::new().strictness(Strictness::Confidence99);
/// let evaluation = test.evaluate(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(evaluation.outlier_count(), 0);
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThompsonTau {
    strictness: Strictness,
    is_sorted: bool,
}

impl ThompsonTau {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strictness(self, strictness: Strictness) -> Self {
        Self { strictness, ..self }
    }

    /// Declares that inputs are already sorted ascending.
    #[must_use]
    pub fn sorted(self, is_sorted: bool) -> Self {
        Self { is_sorted, ..self }
    }

    pub fn evaluate(&self, values: &[f64]) -> Result<Evaluation, EvaluateError> {
        evaluate(values, self.strictness, self.is_sorted)
    }
}
