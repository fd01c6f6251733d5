//! Layer 3: Evaluation
//!
//! What happens around estimation: the seam to an external estimator, the
//! arithmetic that combines its results, and descriptive summaries of a
//! score column.
//!
//! # Module Organization
//!
//! - **estimate**: `Estimate` record and the `RdEstimator` trait
//! - **contrast**: Difference tests and pooled estimates across cutoffs
//! - **summary**: Mass-point counts and collapsing by score
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine (executor, output, validator)
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms (cutoff, perpendicular, point, signing, window)
//!   ↓
//! Layer 1: Primitives (errors, treatment, quadrant, input, exclusion)
//! ```

/// Estimator seam.
///
/// Provides:
/// - The `Estimate` summary record
/// - The `RdEstimator` trait implemented by external estimators
pub mod estimate;

/// Cross-cutoff comparisons.
///
/// Provides:
/// - Two-sided difference tests between cutoff-specific effects
/// - Weighted pooling of cutoff-specific effects
pub mod contrast;

/// Score summaries.
pub mod summary;
