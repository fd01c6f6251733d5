//! Layer 4: Engine
//!
//! Core execution logic for batch normalization.
//!
//! This layer runs the per-row algorithms over whole columns. It validates
//! column structure up front, maps rows sequentially or in parallel, and
//! gathers the outcomes into result containers that keep track of which
//! rows were excluded and why.
//!
//! # Module Organization
//!
//! - **executor**: Row pass execution and gathering
//! - **validator**: Column and configuration validation rules
//! - **output**: Result containers (normalized scores, exclusions)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation (estimate, contrast, summary)
//!   ↓
//! Layer 2: Algorithms (cutoff, perpendicular, point, signing, window)
//!   ↓
//! Layer 1: Primitives (errors, treatment, quadrant, input, exclusion)
//! ```

/// Row pass execution.
///
/// Provides:
/// - Sequential and rayon-parallel row maps with stable order
/// - Gathering of row outcomes into output containers
/// - Batch-level logging of kept and excluded rows
pub mod executor;

/// Validation utilities.
///
/// Provides:
/// - Checks for column alignment
/// - Cutoff, window and probability checks
/// - Duplicate builder parameter detection
pub mod validator;

/// Output types for normalization batches.
///
/// Provides:
/// - The `NormalizedScore` and `CutoffScore` containers
/// - Alignment of outcome columns with the normalized score
pub mod output;
