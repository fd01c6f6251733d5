//! Treatment signing of precomputed distances.
//!
//! Geographic designs usually ship distances that were computed elsewhere
//! (chordal distance to a boundary point, perpendicular distance to a
//! border). They are unsigned, so control rows are negated before the
//! column is used as a running variable.

use num_traits::Float;

use crate::algorithms::perpendicular::read_treatment;
use crate::primitives::exclusion::ExclusionReason;

/// Sign a precomputed distance by treatment.
///
/// Control rows (`tr == 0`) are negated and treated rows kept. A missing
/// distance excludes the row like a missing score would.
pub fn sign_by_treatment<T: Float>(distance: T, tr: T) -> Result<T, ExclusionReason> {
    if distance.is_nan() {
        return Err(ExclusionReason::MissingScore);
    }
    Ok(read_treatment(tr)?.apply(distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negates_control_rows() {
        assert_eq!(sign_by_treatment(2.5, 1.0), Ok(2.5));
        assert_eq!(sign_by_treatment(2.5, 0.0), Ok(-2.5));
        assert_eq!(sign_by_treatment(f64::INFINITY, 0.0), Ok(f64::NEG_INFINITY));
        assert_eq!(
            sign_by_treatment(f64::NAN, 1.0),
            Err(ExclusionReason::MissingScore)
        );
        assert_eq!(
            sign_by_treatment(2.5, f64::NAN),
            Err(ExclusionReason::MissingTreatment)
        );
    }
}
