//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions used throughout the crate.
//! It has zero internal dependencies within the crate apart from the shared
//! error type.
//!
//! # Module Organization
//!
//! - **errors**: Shared error type (NormalizeError)
//! - **treatment**: 0/1 treatment indicators and the `2 * tr - 1` sign
//! - **quadrant**: Ordered quadrant decision list and tie-break policy
//! - **input**: Column input abstraction (slices, vectors, ndarray)
//! - **exclusion**: Row-level exclusion records
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
//! Layer 2: Algorithms (cutoff, perpendicular, point, signing, window)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `NormalizeError` enum
/// - Crate `Result` alias
pub mod errors;

/// Treatment indicators.
///
/// Provides:
/// - Parsing of numeric 0/1 indicators with missing/invalid detection
/// - Treatment sign attachment
pub mod treatment;

/// Quadrant classification.
///
/// Provides:
/// - The inclusive quadrant rules in evaluation order
/// - Explicit tie-break policy for points on an axis
pub mod quadrant;

/// Column input abstraction.
pub mod input;

/// Row-level exclusion records.
pub mod exclusion;
