use crate::{critical_value, strictness::Strictness};

/// Smallest sample for which a rejection threshold exists.
pub const MIN_SAMPLE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TauError {
    #[display("rejection threshold needs at least {MIN_SAMPLE_LEN} values, got {len}")]
    SampleTooSmall { len: usize },
}

/// Degrees of freedom used for a sample of `n` values.
#[must_use]
pub const fn degrees_of_freedom(n: usize) -> usize {
    n.saturating_sub(2)
}

/// Computes the rejection threshold (tau) for a sample of `n` values.
///
/// ```text
/// tau = t * (n - 1) / (sqrt(n) * sqrt(n - 2 + t^2))
/// ```
///
/// where `t` is the critical value at `n - 2` degrees of freedom.
///
/// # Examples
///
/// ```
/// use tautest_core::{Strictness, tau::calc_tau};
///
/// let tau = calc_tau(6, Strictness::Confidence95).unwrap();
/// assert!((tau - 1.6562).abs() < 1e-4);
/// assert!(calc_tau(2, Strictness::Confidence95).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn calc_tau(n: usize, strictness: Strictness) -> Result<f64, TauError> {
    if n < MIN_SAMPLE_LEN {
        return Err(TauError::SampleTooSmall { len: n });
    }
    let t = critical_value::lookup(strictness, degrees_of_freedom(n));
    let n = n as f64;
    Ok(t * (n - 1.0) / (n.sqrt() * (n - 2.0 + t * t).sqrt()))
}
