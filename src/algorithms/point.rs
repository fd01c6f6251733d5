//! Distance to a single boundary point.
//!
//! Estimating a two-score design at one point of the boundary uses the
//! Euclidean distance from each score pair to that point, signed by
//! treatment:
//!
//! ```text
//! dist = sqrt((r1 - p1)^2 + (r2 - p2)^2) * (2 * tr - 1)
//! ```
//!
//! The same missing-value rules apply as for the perpendicular distance.

use num_traits::Float;

use crate::algorithms::perpendicular::read_treatment;
use crate::primitives::exclusion::ExclusionReason;

/// A point on the treatment boundary, in score coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint<T> {
    /// Coordinate on the first running variable.
    pub dim1: T,

    /// Coordinate on the second running variable.
    pub dim2: T,
}

impl<T: Float> BoundaryPoint<T> {
    /// Create a boundary point.
    pub fn new(dim1: T, dim2: T) -> Self {
        Self { dim1, dim2 }
    }

    /// The corner where both centered cutoffs meet.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

/// Unsigned Euclidean distance from `(r1, r2)` to `point`.
#[inline]
pub fn point_distance<T: Float>(r1: T, r2: T, point: BoundaryPoint<T>) -> T {
    let d1 = r1 - point.dim1;
    let d2 = r2 - point.dim2;
    (d1 * d1 + d2 * d2).sqrt()
}

/// Signed distance to `point` for one observation.
pub fn normalize_row<T: Float>(
    r1: T,
    r2: T,
    tr: T,
    point: BoundaryPoint<T>,
) -> Result<T, ExclusionReason> {
    if r1.is_nan() || r2.is_nan() {
        return Err(ExclusionReason::MissingScore);
    }
    let treatment = read_treatment(tr)?;
    Ok(treatment.apply(point_distance(r1, r2, point)))
}
