//! Running-variable normalization for regression discontinuity designs.
//!
//! ## Purpose
//!
//! Multi-cutoff and multi-score RD designs have more than one threshold, but
//! standard RD estimators take one running variable and one cutoff. This
//! crate builds that single running variable:
//!
//! * **Multi-cutoff**: each group's score is shifted by its own cutoff, so
//!   every group's threshold lands at zero on a common axis.
//! * **Multi-score**: a pair of centered scores is reduced to the signed
//!   perpendicular distance to the boundary formed by both cutoffs, or to the
//!   signed distance to a chosen boundary point.
//!
//! The result is a score column aligned with the kept rows, ready to pass to
//! an external estimator together with the matching outcome values.
//!
//! ## Quick start
//!
//! ```
//! use rdnorm::prelude::*;
//!
//! let r1 = vec![3.0, -3.0, -3.0];
//! let r2 = vec![4.0, -4.0, 4.0];
//! let tr = vec![1.0, 0.0, 0.0];
//!
//! let out = Normalizer::<f64>::new()
//!     .adapter(MultiScore)
//!     .build()?
//!     .normalize(&r1, &r2, &tr)?;
//!
//! assert_eq!(out.xnorm, vec![3.0, -5.0, -3.0]);
//! # Ok::<(), NormalizeError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API          (NormalizerBuilder, adapter markers)
//!   ↓
//! Layer 5: Adapters     (multicutoff, multiscore, window)
//!   ↓
//! Layer 4: Engine       (executor, output, validator)
//!   ↓
//! Layer 3: Evaluation   (estimate, contrast, summary)
//!   ↓
//! Layer 2: Algorithms   (cutoff, perpendicular, point, signing, window)
//!   ↓
//! Layer 1: Primitives   (errors, treatment, quadrant, input, exclusion)
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel row passes via `rayon`.
//! * `r`: R bindings via `extendr`.

pub mod adapters;
pub mod algorithms;
pub mod api;
pub mod engine;
pub mod evaluation;
pub mod primitives;

#[cfg(feature = "r")]
mod r;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::api::{
        collapse_by_score, difference_test, partition_by_cutoff, pooled_estimate, Adapter,
        BoundaryPoint, Collapsed, Contrast, CutoffMap, CutoffScore, CutoffSubset, Estimate,
        Exclusion, ExclusionReason, LocalRandomization, LocalWindow, MultiCutoff,
        MultiCutoffNormalizer, MultiScore, MultiScoreNormalizer, NormalizeError,
        NormalizedScore, Normalizer, NormalizerAdapter, NormalizerBuilder, Quadrant,
        RdEstimator, ScoreSummary, TieBreak, Treatment, Window, WindowCounts,
    };
    pub use crate::primitives::input::ScoreInput;
}
