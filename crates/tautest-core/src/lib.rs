//! The Modified Thompson Tau Test for outlier detection.
//!
//! The test repeatedly takes the most extreme value of a sample (the end of the sorted
//! sample farthest from the mean), standardizes its deviation, and rejects it if that
//! deviation exceeds a threshold derived from the Student-t distribution. The threshold
//! is recomputed for the shrinking sample after every rejection, and the run stops at
//! the first extreme that is not rejected.
//!
//! # Modules
//!
//! - [`critical_value`]: Tabulated Student-t critical values
//! - [`tau`]: The rejection threshold for a given sample size
//! - [`moments`]: Mean and sample standard deviation
//! - [`scan`]: Testing the most extreme element of a sorted sample
//! - [`evaluate`](mod@evaluate): The iterative rejection loop
//!
//! # Examples
//!
//! ```
//! use tautest_core::{Strictness, evaluate};
//!
//! let values = [10.0, 10.0, 9.0, 11.0, 10.0, 100.0];
//! let evaluation = evaluate(&values, Strictness::default(), false).unwrap();
//!
//! for (value, is_outlier) in evaluation.labeled() {
//!     println!("{value}: {is_outlier}");
//! }
//! assert_eq!(evaluation.outlier_indices().collect::<Vec<_>>(), [5]);
//! ```

pub use self::{
    evaluate::{EvaluateError, Evaluation, Rejection, ThompsonTau, evaluate},
    strictness::{Strictness, StrictnessError},
};

pub mod critical_value;
pub mod evaluate;
pub mod moments;
pub mod scan;
pub mod strictness;
pub mod tau;
