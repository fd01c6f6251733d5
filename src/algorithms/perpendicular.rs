//! Perpendicular distance to a two-score treatment boundary.
//!
//! ## Purpose
//!
//! With two running variables, each centered at its own cutoff, the
//! treatment boundary is the union of the two half-axes. This module
//! collapses a score pair `(r1, r2)` into a single signed distance to that
//! boundary, which a one-dimensional RD estimator can consume directly.
//!
//! ## Key concepts
//!
//! ### Distance per quadrant
//!
//! With `aux1 = |r1|` and `aux2 = |r2|`:
//!
//! | Quadrant | Signs    | Distance                  |
//! |----------|----------|---------------------------|
//! | 1        | (+, +)   | `min(aux1, aux2)`         |
//! | 2        | (-, +)   | `aux1`                    |
//! | 3        | (+, -)   | `aux2`                    |
//! | 4        | (-, -)   | `sqrt(aux1^2 + aux2^2)`   |
//!
//! In quadrant 4 the nearest boundary point is the corner at the origin.
//!
//! ### Sign
//!
//! The unsigned distance is multiplied by `2 * tr - 1`.
//!
//! ## Invariants
//!
//! * Missing components are never zero-filled: a NaN `r1` or `r2` excludes
//!   the row, since zero would change the quadrant.
//! * No clamping or rounding is applied to `aux1`/`aux2`. The corner
//!   distance is the plain square root of the sum of squares.
//! * The distance is continuous across quadrant boundaries.

use num_traits::Float;

use crate::primitives::exclusion::ExclusionReason;
use crate::primitives::quadrant::{classify, Quadrant, TieBreak};
use crate::primitives::treatment::{Indicator, Treatment};

/// Unsigned distance from `(r1, r2)` to the boundary, given its quadrant.
#[inline]
pub fn unsigned_distance<T: Float>(r1: T, r2: T, quadrant: Quadrant) -> T {
    let aux1 = r1.abs();
    let aux2 = r2.abs();
    match quadrant {
        Quadrant::First => aux1.min(aux2),
        Quadrant::Second => aux1,
        Quadrant::Third => aux2,
        Quadrant::Fourth => (aux1 * aux1 + aux2 * aux2).sqrt(),
    }
}

/// Read a treatment indicator, mapping failures to an exclusion reason.
#[inline]
pub(crate) fn read_treatment<T: Float>(tr: T) -> Result<Treatment, ExclusionReason> {
    match Treatment::from_indicator(tr) {
        Indicator::Valid(t) => Ok(t),
        Indicator::Missing => Err(ExclusionReason::MissingTreatment),
        Indicator::Invalid => Err(ExclusionReason::InvalidTreatment),
    }
}

/// Signed perpendicular distance for one observation.
pub fn normalize_row<T: Float>(
    r1: T,
    r2: T,
    tr: T,
    tie_break: TieBreak,
) -> Result<T, ExclusionReason> {
    if r1.is_nan() || r2.is_nan() {
        return Err(ExclusionReason::MissingScore);
    }
    let treatment = read_treatment(tr)?;
    let quadrant = classify(r1, r2, tie_break).ok_or(ExclusionReason::MissingScore)?;
    Ok(treatment.apply(unsigned_distance(r1, r2, quadrant)))
}
