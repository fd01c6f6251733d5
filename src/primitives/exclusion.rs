//! Row-level exclusion records.
//!
//! A batch never fails because of one row. When a row cannot be normalized
//! its index and the reason are recorded instead, and processing continues.

use core::fmt;

/// Why a row produced no normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    /// A running variable needed by the transform is missing (NaN).
    MissingScore,

    /// The treatment indicator is missing (NaN).
    MissingTreatment,

    /// The treatment indicator is neither 0 nor 1.
    InvalidTreatment,

    /// The row's group label has no cutoff in the mapping.
    UnmappedGroup,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExclusionReason::MissingScore => "missing score",
            ExclusionReason::MissingTreatment => "missing treatment",
            ExclusionReason::InvalidTreatment => "invalid treatment",
            ExclusionReason::UnmappedGroup => "unmapped group",
        };
        f.write_str(s)
    }
}

/// A row left out of a normalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    /// Zero-based index of the row in the input columns.
    pub row: usize,

    /// Why the row was left out.
    pub reason: ExclusionReason,
}
