use crate::{
    moments::SampleMoments,
    strictness::Strictness,
    tau::{self, MIN_SAMPLE_LEN},
};

/// Which end of a sorted sample an element sits on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum End {
    /// The smallest value.
    #[display("first")]
    First,
    /// The largest value.
    #[display("last")]
    Last,
}

/// The most extreme element of a sample, with the numbers the decision was based on.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Candidate {
    pub end: End,
    pub value: f64,
    /// Absolute deviation from the mean in units of sample standard deviation.
    /// Zero when every value in the sample is identical.
    pub delta: f64,
    /// Rejection threshold for the current sample size.
    pub tau: f64,
}

impl Candidate {
    #[must_use]
    pub fn exceeds_threshold(&self) -> bool {
        self.delta > self.tau
    }
}

/// Result of testing the most extreme element of a sorted sample.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The sample is too small for the test to apply.
    Insufficient { len: usize },
    /// The candidate lies within the rejection threshold.
    Inlier(Candidate),
    /// The candidate lies beyond the rejection threshold.
    Outlier(Candidate),
}

impl ScanOutcome {
    #[must_use]
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Insufficient { .. } => None,
            Self::Inlier(candidate) | Self::Outlier(candidate) => Some(candidate),
        }
    }

    /// The end to strip, if the candidate was rejected.
    #[must_use]
    pub fn rejected_end(&self) -> Option<End> {
        match self {
            Self::Outlier(candidate) => Some(candidate.end),
            Self::Insufficient { .. } | Self::Inlier(_) => None,
        }
    }
}

/// Tests whether the most extreme element of `sorted_values` is an outlier.
///
/// The candidate is whichever end deviates more from the mean. When both ends deviate
/// by exactly the same amount the last (largest) element is chosen.
///
/// A sample with zero spread never yields an outlier.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use tautest_core::{Strictness, scan::{End, scan}};
///
/// let outcome = scan(&[9.0, 10.0, 10.0, 10.0, 11.0, 100.0], Strictness::Confidence95);
/// assert_eq!(outcome.rejected_end(), Some(End::Last));
///
/// let outcome = scan(&[9.0, 10.0, 10.0, 10.0, 11.0], Strictness::Confidence95);
/// assert!(outcome.is_inlier());
/// ```
#[must_use]
pub fn scan(sorted_values: &[f64], strictness: Strictness) -> ScanOutcome {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let len = sorted_values.len();
    let insufficient = ScanOutcome::Insufficient { len };
    if len < MIN_SAMPLE_LEN {
        return insufficient;
    }
    let (Some(&first), Some(&last), Some(moments), Ok(tau)) = (
        sorted_values.first(),
        sorted_values.last(),
        SampleMoments::from_values(sorted_values),
        tau::calc_tau(len, strictness),
    ) else {
        return insufficient;
    };

    let (end, value) = if (first - moments.mean).abs() > (last - moments.mean).abs() {
        (End::First, first)
    } else {
        (End::Last, last)
    };
    let delta = moments.standardized_deviation(value).unwrap_or(0.0);
    let candidate = Candidate {
        end,
        value,
        delta,
        tau,
    };

    if candidate.exceeds_threshold() {
        ScanOutcome::Outlier(candidate)
    } else {
        ScanOutcome::Inlier(candidate)
    }
}
