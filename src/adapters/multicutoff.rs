//! Multi-cutoff adapter.
//!
//! ## Purpose
//!
//! This module provides the batch processor for designs with one running
//! variable and several scalar cutoffs, one per group. It normalizes the
//! score of every row against its group's cutoff and splits a dataset into
//! per-cutoff subsets for cutoff-by-cutoff estimation.
//!
//! ## Design notes
//!
//! * The group-to-cutoff mapping is built and validated once, in `build()`.
//! * Normalization is a single lookup-and-shift pass over the rows, so the
//!   result does not depend on the order in which groups are listed.
//! * Output keeps one slot per input row; unmapped groups and missing
//!   scores leave the slot empty rather than defaulting to a zero shift.
//!
//! ## Invariants
//!
//! * Score and group columns have the same length.
//! * The mapping has at least one group and no repeated labels.
//!
//! ## Non-goals
//!
//! * This adapter does not estimate effects; it prepares the score only.

use log::debug;
use num_traits::Float;

use crate::algorithms::cutoff::{self, CutoffMap};
use crate::api::NormalizerBuilder;
use crate::engine::executor::{gather_aligned, row_pass};
use crate::engine::output::CutoffScore;
use crate::engine::validator::Validator;
use crate::primitives::errors::NormalizeError;
use crate::primitives::input::ScoreInput;

// ============================================================================
// Builder
// ============================================================================

/// Builder for the multi-cutoff normalizer.
#[derive(Debug, Clone)]
pub struct MultiCutoffBuilder<T> {
    /// Run row passes in parallel.
    pub parallel: bool,

    /// `(group label, cutoff)` pairs in insertion order.
    pub cutoffs: Vec<(String, T)>,

    /// First parameter set more than once, here or on the shared builder.
    pub(crate) duplicate_param: Option<&'static str>,

    parallel_set: bool,
}

impl<T: Float> MultiCutoffBuilder<T> {
    pub(crate) fn from_shared(shared: NormalizerBuilder<T>) -> Self {
        Self {
            parallel: shared.parallel_or_default(),
            cutoffs: Vec::new(),
            duplicate_param: shared.duplicate_param,
            parallel_set: shared.parallel.is_some(),
        }
    }

    /// Map a group label to its cutoff.
    pub fn cutoff(mut self, label: impl Into<String>, value: T) -> Self {
        self.cutoffs.push((label.into(), value));
        self
    }

    /// Map several group labels to their cutoffs.
    pub fn cutoffs<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        self.cutoffs
            .extend(pairs.into_iter().map(|(label, value)| (label.into(), value)));
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel_set = true;
        self.parallel = parallel;
        self
    }

    /// Build the normalizer.
    pub fn build(self) -> Result<MultiCutoffNormalizer<T>, NormalizeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let cutoffs = CutoffMap::from_pairs(self.cutoffs)?;
        Validator::validate_cutoffs(&cutoffs)?;

        Ok(MultiCutoffNormalizer {
            cutoffs,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Rows of a dataset that share one cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoffSubset<T> {
    /// Group label, when partitioned by label.
    pub label: Option<String>,

    /// The subset's cutoff.
    pub cutoff: T,

    /// Input row indices.
    pub rows: Vec<usize>,

    /// Raw running variable of each row.
    pub x: Vec<T>,

    /// Outcome of each row.
    pub y: Vec<T>,
}

impl<T> CutoffSubset<T> {
    /// Number of rows in the subset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the subset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Multi-cutoff normalizer.
#[derive(Debug, Clone)]
pub struct MultiCutoffNormalizer<T> {
    cutoffs: CutoffMap<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> MultiCutoffNormalizer<T> {
    /// The validated group-to-cutoff mapping.
    pub fn cutoffs(&self) -> &CutoffMap<T> {
        &self.cutoffs
    }

    /// Normalize every row's score against its group's cutoff.
    pub fn normalize<I, S>(&self, x: &I, groups: &[S]) -> Result<CutoffScore<T>, NormalizeError>
    where
        I: ScoreInput<T> + ?Sized,
        S: AsRef<str> + Sync,
    {
        let x = x.as_score_slice()?;
        Validator::validate_lengths(&[("x", x.len()), ("groups", groups.len())])?;

        let cutoffs = &self.cutoffs;
        let outcomes = row_pass(x.len(), self.parallel, |i| {
            cutoff::normalize_row(x[i], groups[i].as_ref(), cutoffs)
        });

        Ok(gather_aligned("multi-cutoff", outcomes))
    }

    /// Split `(x, y)` into one subset per mapped group, in mapping order.
    ///
    /// Rows with an unmapped label belong to no subset.
    pub fn partition<I1, I2, S>(
        &self,
        x: &I1,
        y: &I2,
        groups: &[S],
    ) -> Result<Vec<CutoffSubset<T>>, NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
        S: AsRef<str>,
    {
        let x = x.as_score_slice()?;
        let y = y.as_score_slice()?;
        Validator::validate_lengths(&[("x", x.len()), ("y", y.len()), ("groups", groups.len())])?;

        let mut subsets: Vec<CutoffSubset<T>> = self
            .cutoffs
            .iter()
            .map(|(label, cutoff)| CutoffSubset {
                label: Some(label.to_string()),
                cutoff,
                rows: Vec::new(),
                x: Vec::new(),
                y: Vec::new(),
            })
            .collect();

        for (i, group) in groups.iter().enumerate() {
            let label = group.as_ref();
            if let Some(subset) = subsets
                .iter_mut()
                .find(|s| s.label.as_deref() == Some(label))
            {
                subset.rows.push(i);
                subset.x.push(x[i]);
                subset.y.push(y[i]);
            }
        }

        debug!(
            "multi-cutoff partition: {} rows into {} subsets",
            x.len(),
            subsets.len()
        );
        Ok(subsets)
    }
}

/// Split `(x, y)` by the value of a per-row cutoff column.
///
/// Subsets appear in order of first appearance. Rows with a missing cutoff
/// belong to no subset.
pub fn partition_by_cutoff<T: Float>(
    x: &[T],
    y: &[T],
    cutoff: &[T],
) -> Result<Vec<CutoffSubset<T>>, NormalizeError> {
    Validator::validate_lengths(&[("x", x.len()), ("y", y.len()), ("cutoff", cutoff.len())])?;

    let mut subsets: Vec<CutoffSubset<T>> = Vec::new();
    for (i, &c) in cutoff.iter().enumerate() {
        if c.is_nan() {
            continue;
        }
        let pos = match subsets.iter().position(|s| s.cutoff == c) {
            Some(pos) => pos,
            None => {
                subsets.push(CutoffSubset {
                    label: None,
                    cutoff: c,
                    rows: Vec::new(),
                    x: Vec::new(),
                    y: Vec::new(),
                });
                subsets.len() - 1
            }
        };
        let subset = &mut subsets[pos];
        subset.rows.push(i);
        subset.x.push(x[i]);
        subset.y.push(y[i]);
    }

    Ok(subsets)
}
