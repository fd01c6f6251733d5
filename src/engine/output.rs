//! Output types for normalization batches.
//!
//! ## Purpose
//!
//! This module defines the two result containers returned by the batch
//! normalizers:
//!
//! * [`NormalizedScore`]: the normalized score of every row that could be
//!   normalized, with the source row index of each value. Rows that could
//!   not be normalized are left out and listed in `excluded`.
//! * [`CutoffScore`]: one optional value per input row, so the score can be
//!   appended to the input table as a new column. Missing values are `None`.
//!
//! ## Key concepts
//!
//! ### Alignment
//!
//! An estimator needs the outcome and the score aligned index-for-index.
//! [`NormalizedScore::align`] selects the kept rows of any other column in
//! the same order as `xnorm`.
//!
//! ## Invariants
//!
//! * `xnorm.len() == rows.len()`, and `rows` is strictly increasing.
//! * `rows` and `excluded` together cover every input row exactly once.
//! * Every kept value is defined: missing inputs never produce a value.

use core::fmt;
use num_traits::Float;

use crate::evaluation::estimate::{Estimate, RdEstimator};
use crate::primitives::errors::NormalizeError;
use crate::primitives::exclusion::{Exclusion, ExclusionReason};

// ============================================================================
// Normalized Score
// ============================================================================

/// Normalized scores of the rows that could be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedScore<T> {
    /// Signed normalized score, one per kept row.
    pub xnorm: Vec<T>,

    /// Input row index of each value in `xnorm`.
    pub rows: Vec<usize>,

    /// Rows left out, in row order.
    pub excluded: Vec<Exclusion>,

    /// Number of input rows.
    pub n_input: usize,
}

impl<T: Float> NormalizedScore<T> {
    /// Number of kept rows.
    pub fn len(&self) -> usize {
        self.xnorm.len()
    }

    /// Returns `true` if no row was kept.
    pub fn is_empty(&self) -> bool {
        self.xnorm.is_empty()
    }

    /// Number of rows excluded for `reason`.
    pub fn excluded_for(&self, reason: ExclusionReason) -> usize {
        self.excluded.iter().filter(|e| e.reason == reason).count()
    }

    /// Select the kept rows of `column`, aligned with `xnorm`.
    ///
    /// `column` must have one entry per input row.
    pub fn align<C: Copy>(&self, column: &[C]) -> Result<Vec<C>, NormalizeError> {
        if column.len() != self.n_input {
            return Err(NormalizeError::MismatchedInputs {
                left: "xnorm input",
                left_len: self.n_input,
                right: "column",
                right_len: column.len(),
            });
        }
        Ok(self.rows.iter().map(|&i| column[i]).collect())
    }

    /// Run an estimator on `outcome` against the normalized score at cutoff 0.
    pub fn estimate_with<E>(&self, estimator: &E, outcome: &[T]) -> Result<Estimate<T>, E::Error>
    where
        E: RdEstimator<T>,
        E::Error: From<NormalizeError>,
    {
        let y = self.align(outcome)?;
        estimator.estimate(&y, &self.xnorm, T::zero())
    }

    /// Kept rows on the treated side (`xnorm > 0`).
    pub fn n_positive(&self) -> usize {
        self.xnorm.iter().filter(|&&v| v > T::zero()).count()
    }
}

impl<T: Float + fmt::Display> fmt::Display for NormalizedScore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Input rows: {}", self.n_input)?;
        writeln!(f, "  Kept rows: {}", self.len())?;
        writeln!(f, "  Treated side: {}", self.n_positive())?;
        if !self.excluded.is_empty() {
            writeln!(f, "  Excluded rows: {}", self.excluded.len())?;
            for reason in [
                ExclusionReason::MissingScore,
                ExclusionReason::MissingTreatment,
                ExclusionReason::InvalidTreatment,
                ExclusionReason::UnmappedGroup,
            ] {
                let count = self.excluded_for(reason);
                if count > 0 {
                    writeln!(f, "    {}: {}", reason, count)?;
                }
            }
        }
        writeln!(f)?;

        writeln!(f, "{:>8} {:>14}", "Row", "xnorm")?;
        writeln!(f, "{:-<23}", "")?;

        // Show first 10 and last 10 if more than 20 rows
        let n = self.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>8} {:>14.6}", self.rows[idx], self.xnorm[idx])?;
        }

        Ok(())
    }
}

// ============================================================================
// Cutoff Score
// ============================================================================

/// Single-boundary normalized score, one slot per input row.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffScore<T> {
    /// Normalized score, `None` where the row could not be normalized.
    pub xnorm: Vec<Option<T>>,

    /// Rows without a value, in row order.
    pub excluded: Vec<Exclusion>,
}

impl<T: Float> CutoffScore<T> {
    /// Number of input rows.
    pub fn len(&self) -> usize {
        self.xnorm.len()
    }

    /// Returns `true` if there were no input rows.
    pub fn is_empty(&self) -> bool {
        self.xnorm.is_empty()
    }

    /// The column with missing values as NaN.
    pub fn to_column(&self) -> Vec<T> {
        self.xnorm.iter().map(|v| v.unwrap_or_else(T::nan)).collect()
    }

    /// Drop the rows without a value.
    pub fn complete(&self) -> NormalizedScore<T> {
        let (rows, xnorm): (Vec<usize>, Vec<T>) = self
            .xnorm
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .unzip();
        NormalizedScore {
            xnorm,
            rows,
            excluded: self.excluded.clone(),
            n_input: self.xnorm.len(),
        }
    }
}
