//! Local-randomization windows around the cutoff.
//!
//! A window `[left, right]` containing the cutoff selects the observations
//! treated as if randomly assigned. Randomization inference under a
//! Bernoulli assignment mechanism needs a per-row assignment probability:
//! `p` inside the window and missing (NaN) everywhere else.
//!
//! Bounds and probabilities are checked by the engine validator before
//! these functions are reached.

use num_traits::Float;

/// Closed interval of the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<T> {
    /// Lower bound (inclusive).
    pub left: T,

    /// Upper bound (inclusive).
    pub right: T,
}

impl<T: Float> Window<T> {
    /// Window `[left, right]`.
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Window `[-half_width, half_width]`.
    pub fn symmetric(half_width: T) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Window `[center - half_width, center + half_width]`.
    pub fn around(center: T, half_width: T) -> Self {
        Self::new(center - half_width, center + half_width)
    }

    /// Whether `x` lies inside the window. Missing scores never do.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.left && x <= self.right
    }

    /// Width of the window.
    pub fn width(&self) -> T {
        self.right - self.left
    }
}

/// Assignment probability for one row.
#[inline]
pub fn bernoulli_probability<T: Float>(x: T, window: &Window<T>, p: T) -> T {
    if window.contains(x) {
        p
    } else {
        T::nan()
    }
}
