//! Layer 5: Adapters
//!
//! Design-specific batch processors.
//!
//! This layer provides user-facing processors that adapt the engine to the
//! design at hand:
//!
//! - **MultiCutoff**: One running variable, one cutoff per group
//! - **MultiScore**: Two running variables and a two-cutoff boundary
//! - **LocalRandomization**: Windows around the cutoff
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine (executor, output, validator)
//!   ↓
//! Layer 3: Evaluation (estimate, contrast, summary)
//!   ↓
//! Layer 2: Algorithms (cutoff, perpendicular, point, signing, window)
//!   ↓
//! Layer 1: Primitives (errors, treatment, quadrant, input, exclusion)
//! ```

// ============================================================================
// Multi-Cutoff Adapter
// ============================================================================

/// Multi-cutoff normalization.
///
/// Provides:
/// - Per-group shift of the score to a common zero
/// - Per-cutoff partition of a dataset
pub mod multicutoff;

// ============================================================================
// Multi-Score Adapter
// ============================================================================

/// Multi-score normalization.
///
/// Provides:
/// - Perpendicular distance to the two-cutoff boundary
/// - Distances to individual boundary points
/// - Treatment signing of precomputed distances
pub mod multiscore;

// ============================================================================
// Local Randomization Adapter
// ============================================================================

/// Local-randomization windows.
///
/// Provides:
/// - Window membership and side counts
/// - Bernoulli assignment probabilities
pub mod window;
