//! The estimator seam.
//!
//! Point estimation, bandwidth selection and inference are done by an
//! external RD estimation library. This crate only prepares the running
//! variable; [`RdEstimator`] is the boundary it hands that variable across.

use num_traits::Float;

/// Summary returned by an RD estimator at one cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate<T> {
    /// Treatment-effect point estimate.
    pub point_estimate: T,

    /// Standard error of the point estimate.
    pub standard_error: T,

    /// Lower bound of the confidence interval.
    pub ci_lower: T,

    /// Upper bound of the confidence interval.
    pub ci_upper: T,

    /// Bandwidth used to the left of the cutoff.
    pub bandwidth_left: T,

    /// Bandwidth used to the right of the cutoff.
    pub bandwidth_right: T,

    /// Effective observations left of the cutoff.
    pub n_left: usize,

    /// Effective observations right of the cutoff.
    pub n_right: usize,
}

impl<T: Float> Estimate<T> {
    /// Sampling variance, `standard_error^2`.
    pub fn variance(&self) -> T {
        self.standard_error * self.standard_error
    }
}

/// An external RD point estimator.
///
/// `outcome` and `score` are aligned index-for-index; `cutoff` is the
/// threshold on `score`.
pub trait RdEstimator<T: Float> {
    /// Error reported by the estimator.
    type Error;

    /// Estimate the treatment effect at `cutoff`.
    fn estimate(&self, outcome: &[T], score: &[T], cutoff: T) -> Result<Estimate<T>, Self::Error>;
}
