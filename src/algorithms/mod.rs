//! Layer 2: Algorithms
//!
//! Per-row transforms of running variables.
//!
//! Every function in this layer maps one observation to one value, with no
//! state shared between rows. Batch iteration, validation and parallelism
//! live in the engine and adapter layers above.
//!
//! # Module Organization
//!
//! - **cutoff**: Single-boundary shift for multi-cutoff designs
//! - **perpendicular**: Signed distance to a two-score boundary
//! - **point**: Signed distance to one boundary point
//! - **signing**: Treatment signing of precomputed distances
//! - **window**: Local-randomization windows and assignment probabilities
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
//! Layer 3: Evaluation (estimate, contrast, summary)
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives (errors, treatment, quadrant, input, exclusion)
//! ```

/// Single-boundary normalization.
///
/// Provides:
/// - Group label to cutoff mapping
/// - Per-row shift to a common zero
pub mod cutoff;

/// Perpendicular-distance normalization.
///
/// Provides:
/// - Per-quadrant distance to the union of two half-axes
/// - Treatment-signed row transform
pub mod perpendicular;

/// Distance to a boundary point.
pub mod point;

/// Treatment signing of precomputed distances.
pub mod signing;

/// Local-randomization windows.
pub mod window;
