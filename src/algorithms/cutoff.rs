//! Single-boundary normalization for multi-cutoff designs.
//!
//! ## Purpose
//!
//! In a multi-cutoff design every group (region, administrative area, ...)
//! has its own scalar cutoff on a shared running variable. Subtracting the
//! group's cutoff moves every group's threshold to zero, so a single-cutoff
//! estimator can be run once on the pooled, normalized score.
//!
//! ## Design notes
//!
//! * The group-to-cutoff assignment is a pure lookup in a [`CutoffMap`],
//!   applied once per row. Rows never depend on each other.
//! * An unmapped label yields no score. It is never shifted by zero.
//! * A missing (NaN) score yields no score. Infinite scores are not
//!   validated and propagate through the shift.
//!
//! ## Key concepts
//!
//! The shift is always `x - cutoff`, whatever the cutoff's sign. With a
//! cutoff of `-57.21`, a raw score of `-60.0` normalizes to
//! `-60.0 - (-57.21) = -2.79`; with a cutoff of `10`, `12` normalizes to
//! `2`. The sign says which side of the group's own threshold the
//! observation is on.

use std::collections::HashMap;

use num_traits::Float;

use crate::primitives::errors::NormalizeError;
use crate::primitives::exclusion::ExclusionReason;

// ============================================================================
// Cutoff Map
// ============================================================================

/// Ordered mapping from group label to scalar cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffMap<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for CutoffMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Float> CutoffMap<T> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group label and its cutoff.
    ///
    /// A label may appear only once.
    pub fn insert(&mut self, label: impl Into<String>, cutoff: T) -> Result<(), NormalizeError> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(NormalizeError::DuplicateGroup { label });
        }
        self.index.insert(label.clone(), self.entries.len());
        self.entries.push((label, cutoff));
        Ok(())
    }

    /// Build a mapping from `(label, cutoff)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (label, cutoff) in pairs {
            map.insert(label, cutoff)?;
        }
        Ok(map)
    }

    /// Cutoff for `label`, if mapped.
    #[inline]
    pub fn get(&self, label: &str) -> Option<T> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    /// Group labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// `(label, cutoff)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.entries.iter().map(|(label, c)| (label.as_str(), *c))
    }

    /// Number of mapped groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no group is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Row Transform
// ============================================================================

/// Shift a raw score so that `cutoff` lands on zero.
///
/// Returns `None` for a missing score.
#[inline]
pub fn shift_score<T: Float>(x: T, cutoff: T) -> Option<T> {
    if x.is_nan() {
        None
    } else {
        Some(x - cutoff)
    }
}

/// Normalize one row against its group's cutoff.
pub fn normalize_row<T: Float>(
    x: T,
    label: &str,
    cutoffs: &CutoffMap<T>,
) -> Result<T, ExclusionReason> {
    let cutoff = cutoffs.get(label).ok_or(ExclusionReason::UnmappedGroup)?;
    shift_score(x, cutoff).ok_or(ExclusionReason::MissingScore)
}
