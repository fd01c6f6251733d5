//! Error types for running-variable normalization.
//!
//! ## Purpose
//!
//! This module defines [`NormalizeError`], the single error type returned by
//! builders, validators and batch processors in this crate.
//!
//! ## Design notes
//!
//! * Only structural problems are errors: mismatched column lengths, a
//!   malformed cutoff mapping, invalid configuration.
//! * Row-level problems (a missing score, an unmapped group label) are not
//!   errors. They are recorded as exclusions in the batch output so that
//!   one bad row never aborts the rest of the batch.
//! * Variants carry the offending values so messages are actionable.

use thiserror::Error;

/// Errors produced while configuring or running a normalizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// A required column was empty where at least one value is needed.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Two columns that must be aligned row-for-row differ in length.
    #[error("mismatched input lengths: {left} has {left_len} rows, {right} has {right_len}")]
    MismatchedInputs {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// The cutoff mapping has no entries.
    #[error("cutoff mapping is empty")]
    EmptyCutoffs,

    /// The same group label was mapped to a cutoff more than once.
    #[error("group label {label:?} is mapped to more than one cutoff")]
    DuplicateGroup { label: String },

    /// A builder parameter was set more than once.
    #[error("parameter '{parameter}' was set multiple times")]
    DuplicateParameter { parameter: &'static str },

    /// Input could not be viewed as a contiguous column.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Window bounds are not finite or are out of order.
    #[error("invalid window [{left}, {right}]")]
    InvalidWindow { left: f64, right: f64 },

    /// The cutoff of a local-randomization window lies outside it.
    #[error("cutoff {cutoff} lies outside window [{left}, {right}]")]
    CutoffOutsideWindow { cutoff: f64, left: f64, right: f64 },

    /// A probability outside the open interval (0, 1).
    #[error("invalid probability {0}: must be in (0, 1)")]
    InvalidProbability(f64),

    /// A variance that is negative or not finite.
    #[error("invalid variance {0}: must be finite and non-negative")]
    InvalidVariance(f64),
}

/// Result type alias for normalization operations.
pub type Result<T> = core::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = NormalizeError::MismatchedInputs {
            left: "r1",
            left_len: 3,
            right: "r2",
            right_len: 2,
        };
        assert_eq!(
            err.to_string(),
            "mismatched input lengths: r1 has 3 rows, r2 has 2"
        );

        let err = NormalizeError::DuplicateGroup {
            label: "Rural area".into(),
        };
        assert!(err.to_string().contains("\"Rural area\""));
    }
}
