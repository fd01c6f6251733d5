//! High-level API for running-variable normalization.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the options shared by every normalizer and a choice of
//! adapter for the design at hand (multi-cutoff, multi-score, or a
//! local-randomization window).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for all shared options.
//! * **Polymorphic**: Marker types select a design-specific builder.
//! * **Validated**: Options are validated when the adapter builder is built.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NormalizerBuilder`] via `Normalizer::new()`.
//! 2. Chain shared options (`.parallel()`, `.tie_break()`).
//! 3. Select an adapter via `.adapter(MultiScore)` (or `MultiCutoff`,
//!    `LocalRandomization`) to get a design-specific builder.
//! 4. Call `.build()` and run the resulting processor on columns.
//!
//! ```text
//! Normalizer::<f64>::new()
//!     .tie_break(TieBreak::LastMatch)
//!     .adapter(MultiScore)
//!     .build()?
//!     .normalize(&r1, &r2, &tr)?
//! ```
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered stable.

use core::marker::PhantomData;
use num_traits::Float;

// Internal adapters
use crate::adapters::multicutoff::MultiCutoffBuilder;
use crate::adapters::multiscore::MultiScoreBuilder;
use crate::adapters::window::LocalWindowBuilder;

// Publicly re-exported types
pub use crate::adapters::multicutoff::{partition_by_cutoff, CutoffSubset, MultiCutoffNormalizer};
pub use crate::adapters::multiscore::MultiScoreNormalizer;
pub use crate::adapters::window::{LocalWindow, WindowCounts};
pub use crate::algorithms::cutoff::CutoffMap;
pub use crate::algorithms::point::BoundaryPoint;
pub use crate::algorithms::window::Window;
pub use crate::engine::output::{CutoffScore, NormalizedScore};
pub use crate::evaluation::contrast::{difference_test, pooled_estimate, Contrast};
pub use crate::evaluation::estimate::{Estimate, RdEstimator};
pub use crate::evaluation::summary::{collapse_by_score, Collapsed, ScoreSummary};
pub use crate::primitives::errors::{NormalizeError, Result};
pub use crate::primitives::exclusion::{Exclusion, ExclusionReason};
pub use crate::primitives::quadrant::{Quadrant, TieBreak};
pub use crate::primitives::treatment::Treatment;

/// Marker types for selecting a normalizer adapter.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{LocalRandomization, MultiCutoff, MultiScore};
}

/// Fluent builder for options shared by all normalizers.
#[derive(Debug, Clone)]
pub struct NormalizerBuilder<T> {
    /// Run row passes in parallel (default: true when the `cpu` feature is on).
    pub parallel: Option<bool>,

    /// Quadrant tie-break policy for two-score designs (default: `LastMatch`).
    pub tie_break: Option<TieBreak>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,

    _float: PhantomData<T>,
}

impl<T: Float> Default for NormalizerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NormalizerBuilder<T> {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            parallel: None,
            tie_break: None,
            duplicate_param: None,
            _float: PhantomData,
        }
    }

    fn mark(&mut self, set: bool, name: &'static str) {
        if set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(name);
        }
    }

    /// Set parallel execution of row passes.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.mark(self.parallel.is_some(), "parallel");
        self.parallel = Some(parallel);
        self
    }

    /// Set the quadrant tie-break policy.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.mark(self.tie_break.is_some(), "tie_break");
        self.tie_break = Some(tie_break);
        self
    }

    /// Resolved parallel flag.
    pub(crate) fn parallel_or_default(&self) -> bool {
        self.parallel.unwrap_or(cfg!(feature = "cpu"))
    }

    /// Resolved tie-break policy.
    pub(crate) fn tie_break_or_default(&self) -> TieBreak {
        self.tie_break.unwrap_or_default()
    }

    /// Select an adapter to transition to a design-specific builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: NormalizerAdapter<T>,
    {
        A::convert(self)
    }
}

/// Convenience alias: `Normalizer::<f64>::new()`.
pub type Normalizer<T> = NormalizerBuilder<T>;

/// Conversion from the shared builder into a design-specific builder.
pub trait NormalizerAdapter<T: Float> {
    /// Builder produced by this adapter.
    type Output;

    /// Convert the shared builder.
    fn convert(builder: NormalizerBuilder<T>) -> Self::Output;
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker type for the multi-cutoff (single running variable) design.
#[derive(Debug, Clone, Copy)]
pub struct MultiCutoff;

impl<T: Float> NormalizerAdapter<T> for MultiCutoff {
    type Output = MultiCutoffBuilder<T>;

    fn convert(builder: NormalizerBuilder<T>) -> Self::Output {
        MultiCutoffBuilder::from_shared(builder)
    }
}

/// Marker type for the multi-score (two running variables) design.
#[derive(Debug, Clone, Copy)]
pub struct MultiScore;

impl<T: Float> NormalizerAdapter<T> for MultiScore {
    type Output = MultiScoreBuilder<T>;

    fn convert(builder: NormalizerBuilder<T>) -> Self::Output {
        MultiScoreBuilder::from_shared(builder)
    }
}

/// Marker type for local-randomization window preparation.
#[derive(Debug, Clone, Copy)]
pub struct LocalRandomization;

impl<T: Float> NormalizerAdapter<T> for LocalRandomization {
    type Output = LocalWindowBuilder<T>;

    fn convert(builder: NormalizerBuilder<T>) -> Self::Output {
        LocalWindowBuilder::from_shared(builder)
    }
}
