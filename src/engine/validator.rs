//! Input validation for normalizer configuration and data.
//!
//! ## Purpose
//!
//! This module checks the structural preconditions of a batch before any
//! row is transformed: aligned column lengths, a usable cutoff mapping,
//! sane window bounds and probabilities, and builder parameters set at most
//! once.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first violation.
//! * Only structure is validated. Row values (missing scores, unmapped
//!   labels, non-finite scores) are not errors here; the executor records
//!   them as row exclusions or lets them propagate.
//!
//! ## Non-goals
//!
//! * This module does not range-check scores or cutoffs. Negative cutoffs
//!   and non-finite scores are legitimate inputs.

use num_traits::Float;

use crate::algorithms::cutoff::CutoffMap;
use crate::algorithms::window::Window;
use crate::primitives::errors::NormalizeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for normalizer configuration and input columns.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Column Validation
    // ========================================================================

    /// Validate that every named column has the length of the first one.
    pub fn validate_lengths(columns: &[(&'static str, usize)]) -> Result<(), NormalizeError> {
        let Some(&(left, left_len)) = columns.first() else {
            return Ok(());
        };
        for &(right, right_len) in &columns[1..] {
            if right_len != left_len {
                return Err(NormalizeError::MismatchedInputs {
                    left,
                    left_len,
                    right,
                    right_len,
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a cutoff mapping.
    pub fn validate_cutoffs<T: Float>(cutoffs: &CutoffMap<T>) -> Result<(), NormalizeError> {
        if cutoffs.is_empty() {
            return Err(NormalizeError::EmptyCutoffs);
        }
        Ok(())
    }

    /// Validate local-randomization window bounds.
    pub fn validate_window<T: Float>(window: &Window<T>) -> Result<(), NormalizeError> {
        if !window.left.is_finite() || !window.right.is_finite() || window.left > window.right {
            return Err(NormalizeError::InvalidWindow {
                left: window.left.to_f64().unwrap_or(f64::NAN),
                right: window.right.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that a window contains its cutoff.
    pub fn validate_window_cutoff<T: Float>(
        window: &Window<T>,
        cutoff: T,
    ) -> Result<(), NormalizeError> {
        if !window.contains(cutoff) {
            return Err(NormalizeError::CutoffOutsideWindow {
                cutoff: cutoff.to_f64().unwrap_or(f64::NAN),
                left: window.left.to_f64().unwrap_or(f64::NAN),
                right: window.right.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate an assignment probability in (0, 1).
    pub fn validate_probability<T: Float>(p: T) -> Result<(), NormalizeError> {
        if !p.is_finite() || p <= T::zero() || p >= T::one() {
            return Err(NormalizeError::InvalidProbability(
                p.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), NormalizeError> {
        if let Some(param) = duplicate_param {
            return Err(NormalizeError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_must_match_first_column() {
        assert!(Validator::validate_lengths(&[]).is_ok());
        assert!(Validator::validate_lengths(&[("r1", 3), ("r2", 3), ("tr", 3)]).is_ok());
        assert_eq!(
            Validator::validate_lengths(&[("r1", 3), ("r2", 3), ("tr", 2)]),
            Err(NormalizeError::MismatchedInputs {
                left: "r1",
                left_len: 3,
                right: "tr",
                right_len: 2,
            })
        );
    }

    #[test]
    fn empty_cutoffs_rejected() {
        assert_eq!(
            Validator::validate_cutoffs(&CutoffMap::<f64>::new()),
            Err(NormalizeError::EmptyCutoffs)
        );
    }

    #[test]
    fn windows_and_probabilities() {
        assert!(Validator::validate_window(&Window::new(-2.5, 2.5)).is_ok());
        assert!(Validator::validate_window(&Window::new(0.0, 0.0)).is_ok());
        assert!(Validator::validate_window(&Window::new(1.0, -1.0)).is_err());
        assert!(Validator::validate_window(&Window::new(f64::NAN, 1.0)).is_err());

        let placebo = Window::new(0.2348, 1.7652);
        assert!(Validator::validate_window_cutoff(&placebo, 1.0).is_ok());
        assert_eq!(
            Validator::validate_window_cutoff(&placebo, 0.0),
            Err(NormalizeError::CutoffOutsideWindow {
                cutoff: 0.0,
                left: 0.2348,
                right: 1.7652,
            })
        );

        assert!(Validator::validate_probability(0.5).is_ok());
        assert_eq!(
            Validator::validate_probability(1.0),
            Err(NormalizeError::InvalidProbability(1.0))
        );
        assert!(Validator::validate_probability(0.0).is_err());
    }

    #[test]
    fn duplicate_parameters() {
        assert!(Validator::validate_no_duplicates(None).is_ok());
        assert_eq!(
            Validator::validate_no_duplicates(Some("parallel")),
            Err(NormalizeError::DuplicateParameter {
                parameter: "parallel"
            })
        );
    }
}
