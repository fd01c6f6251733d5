//! Row pass execution.
//!
//! ## Purpose
//!
//! Every normalizer is a pure map over rows. This module runs that map over
//! `0..n`, either sequentially or across CPU cores with `rayon`, and
//! gathers the per-row outcomes into the crate's output types.
//!
//! ## Invariants
//!
//! * Output order equals row order in both execution modes.
//! * A row's outcome depends only on that row and on read-only shared
//!   configuration (cutoff map, tie-break policy, boundary point).
//!
//! ## Non-goals
//!
//! * This module does not validate columns (handled by `validator`).

#[cfg(feature = "cpu")]
use rayon::prelude::*;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::engine::output::{CutoffScore, NormalizedScore};
use crate::primitives::exclusion::{Exclusion, ExclusionReason};

/// Outcome of transforming one row.
pub type RowOutcome<T> = Result<T, ExclusionReason>;

// ============================================================================
// Row Pass
// ============================================================================

/// Map `row` over `0..n`, in parallel when requested and available.
pub fn row_pass<R, F>(n: usize, parallel: bool, row: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize) -> R + Sync + Send,
{
    #[cfg(feature = "cpu")]
    if parallel {
        return (0..n).into_par_iter().map(row).collect();
    }
    #[cfg(not(feature = "cpu"))]
    let _ = parallel;

    (0..n).map(row).collect()
}

// ============================================================================
// Gathering
// ============================================================================

fn record_exclusion(excluded: &mut Vec<Exclusion>, row: usize, reason: ExclusionReason) {
    trace!("row {} excluded: {}", row, reason);
    excluded.push(Exclusion { row, reason });
}

/// Gather row outcomes, dropping excluded rows.
pub fn gather_kept<T: Float>(label: &str, outcomes: Vec<RowOutcome<T>>) -> NormalizedScore<T> {
    let n_input = outcomes.len();
    let mut xnorm = Vec::with_capacity(n_input);
    let mut rows = Vec::with_capacity(n_input);
    let mut excluded = Vec::new();

    for (i, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(v) => {
                xnorm.push(v);
                rows.push(i);
            }
            Err(reason) => record_exclusion(&mut excluded, i, reason),
        }
    }

    debug!(
        "{}: {} rows in, {} kept, {} excluded",
        label,
        n_input,
        xnorm.len(),
        excluded.len()
    );
    if n_input > 0 && xnorm.is_empty() {
        warn!("{}: every row was excluded", label);
    }

    NormalizedScore {
        xnorm,
        rows,
        excluded,
        n_input,
    }
}

/// Gather row outcomes, keeping one slot per input row.
pub fn gather_aligned<T: Float>(label: &str, outcomes: Vec<RowOutcome<T>>) -> CutoffScore<T> {
    let n_input = outcomes.len();
    let mut xnorm = Vec::with_capacity(n_input);
    let mut excluded = Vec::new();

    for (i, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(v) => xnorm.push(Some(v)),
            Err(reason) => {
                record_exclusion(&mut excluded, i, reason);
                xnorm.push(None);
            }
        }
    }

    debug!(
        "{}: {} rows in, {} missing",
        label,
        n_input,
        excluded.len()
    );
    if n_input > 0 && excluded.len() == n_input {
        warn!("{}: no row could be normalized", label);
    }

    CutoffScore { xnorm, excluded }
}
