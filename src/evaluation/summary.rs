//! Score summaries and mass-point collapsing.
//!
//! ## Purpose
//!
//! A running variable with few distinct values (mass points) calls for a
//! look at how many observations share each value before estimation. This
//! module counts non-missing and distinct scores and collapses an outcome to
//! its mean at each distinct score.
//!
//! ## Design notes
//!
//! * NaN marks a missing value, in the score and in the outcome.
//! * Distinct values compare with `==`, so `-0.0` and `0.0` are one value.
//! * Collapsed output is sorted ascending by score. Means skip missing
//!   outcomes; a score whose outcomes are all missing collapses to NaN.

use core::cmp::Ordering;
use num_traits::Float;

use crate::primitives::errors::NormalizeError;

/// Counts describing a score column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    /// Rows whose score is present.
    pub non_missing: usize,

    /// Distinct present score values.
    pub distinct: usize,
}

impl ScoreSummary {
    /// Summarize a score column.
    pub fn from_scores<T: Float>(scores: &[T]) -> Self {
        let mut present: Vec<T> = scores.iter().copied().filter(|v| !v.is_nan()).collect();
        let non_missing = present.len();
        present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        present.dedup();
        Self {
            non_missing,
            distinct: present.len(),
        }
    }

    /// Average number of rows per distinct score.
    pub fn rows_per_value(&self) -> f64 {
        if self.distinct == 0 {
            0.0
        } else {
            self.non_missing as f64 / self.distinct as f64
        }
    }
}

/// Outcome means at each distinct score.
#[derive(Debug, Clone, PartialEq)]
pub struct Collapsed<T> {
    /// Distinct scores, ascending.
    pub score: Vec<T>,

    /// Mean outcome at each score.
    pub mean: Vec<T>,

    /// Non-missing outcomes averaged at each score.
    pub count: Vec<usize>,
}

impl<T> Collapsed<T> {
    /// Number of distinct scores.
    pub fn len(&self) -> usize {
        self.score.len()
    }

    /// Returns `true` if no score was present.
    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
    }
}

/// Collapse `outcome` to its mean at each distinct `score`.
pub fn collapse_by_score<T: Float>(
    score: &[T],
    outcome: &[T],
) -> Result<Collapsed<T>, NormalizeError> {
    if score.len() != outcome.len() {
        return Err(NormalizeError::MismatchedInputs {
            left: "score",
            left_len: score.len(),
            right: "outcome",
            right_len: outcome.len(),
        });
    }

    let mut pairs: Vec<(T, T)> = score
        .iter()
        .zip(outcome)
        .filter(|(s, _)| !s.is_nan())
        .map(|(&s, &y)| (s, y))
        .collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut out = Collapsed {
        score: Vec::new(),
        mean: Vec::new(),
        count: Vec::new(),
    };

    let mut i = 0;
    while i < pairs.len() {
        let key = pairs[i].0;
        let mut sum = T::zero();
        let mut count = 0usize;
        while i < pairs.len() && pairs[i].0 == key {
            let y = pairs[i].1;
            if !y.is_nan() {
                sum = sum + y;
                count += 1;
            }
            i += 1;
        }
        let mean = if count == 0 {
            T::nan()
        } else {
            sum / T::from(count).unwrap_or_else(T::nan)
        };
        out.score.push(key);
        out.mean.push(mean);
        out.count.push(count);
    }

    Ok(out)
}
