//! Comparisons between cutoff-specific estimates.
//!
//! ## Purpose
//!
//! A multi-cutoff analysis yields one estimate per cutoff. This module
//! combines them after estimation:
//!
//! * [`difference_test`]: tests whether two cutoff-specific effects differ,
//!   treating them as independent. `se = sqrt(var_a + var_b)`,
//!   `t = diff / se`, two-sided `p = 2 * Phi(-|t|)`.
//! * [`pooled_estimate`]: the weighted average `sum(w_i * est_i)` that
//!   reconstructs a pooled effect from per-cutoff coefficients and weights.
//!
//! ## Non-goals
//!
//! * This module does not compute the estimates, their variances or the
//!   pooling weights. Those come from the estimator.

use num_traits::Float;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::evaluation::estimate::Estimate;
use crate::primitives::errors::NormalizeError;

/// Result of a two-sided difference test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast<T> {
    /// `a - b`.
    pub difference: T,

    /// `sqrt(var_a + var_b)`.
    pub standard_error: T,

    /// `difference / standard_error`.
    pub t_stat: T,

    /// Two-sided normal p-value.
    pub p_value: T,
}

fn check_variance<T: Float>(variance: T) -> Result<(), NormalizeError> {
    if !variance.is_finite() || variance < T::zero() {
        return Err(NormalizeError::InvalidVariance(
            variance.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(())
}

/// Two-sided test of `a == b` from point estimates and variances.
pub fn difference_from_moments<T: Float>(
    estimate_a: T,
    variance_a: T,
    estimate_b: T,
    variance_b: T,
) -> Result<Contrast<T>, NormalizeError> {
    check_variance(variance_a)?;
    check_variance(variance_b)?;

    let difference = estimate_a - estimate_b;
    let standard_error = (variance_a + variance_b).sqrt();
    let t_stat = difference / standard_error;

    let normal =
        Normal::new(0.0, 1.0).map_err(|e| NormalizeError::InvalidInput(e.to_string()))?;
    let t = t_stat.to_f64().unwrap_or(f64::NAN);
    let p = 2.0 * normal.cdf(-t.abs());

    Ok(Contrast {
        difference,
        standard_error,
        t_stat,
        p_value: T::from(p).unwrap_or_else(T::nan),
    })
}

/// Two-sided test that two cutoff-specific effects are equal.
pub fn difference_test<T: Float>(
    a: &Estimate<T>,
    b: &Estimate<T>,
) -> Result<Contrast<T>, NormalizeError> {
    difference_from_moments(a.point_estimate, a.variance(), b.point_estimate, b.variance())
}

/// Weighted combination `sum(w_i * est_i)` of cutoff-specific estimates.
pub fn pooled_estimate<T: Float>(estimates: &[T], weights: &[T]) -> Result<T, NormalizeError> {
    if estimates.is_empty() {
        return Err(NormalizeError::EmptyInput("estimates"));
    }
    if estimates.len() != weights.len() {
        return Err(NormalizeError::MismatchedInputs {
            left: "estimates",
            left_len: estimates.len(),
            right: "weights",
            right_len: weights.len(),
        });
    }
    Ok(estimates
        .iter()
        .zip(weights)
        .fold(T::zero(), |acc, (&e, &w)| acc + e * w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn estimate(point: f64, se: f64) -> Estimate<f64> {
        Estimate {
            point_estimate: point,
            standard_error: se,
            ci_lower: point - 1.96 * se,
            ci_upper: point + 1.96 * se,
            bandwidth_left: 10.0,
            bandwidth_right: 10.0,
            n_left: 100,
            n_right: 100,
        }
    }

    #[test]
    fn difference_of_two_effects() {
        let c = difference_test(&estimate(0.3, 0.03), &estimate(0.2, 0.04)).unwrap();
        assert_relative_eq!(c.difference, 0.1, epsilon = 1e-12);
        assert_relative_eq!(c.standard_error, 0.05, epsilon = 1e-12);
        assert_relative_eq!(c.t_stat, 2.0, epsilon = 1e-9);
        // 2 * Phi(-2)
        assert_abs_diff_eq!(c.p_value, 0.045_500_263_896_358_42, epsilon = 1e-9);
    }

    #[test]
    fn equal_effects_have_unit_p_value() {
        let c = difference_from_moments(1.0, 0.01, 1.0, 0.01).unwrap();
        assert_eq!(c.difference, 0.0);
        assert_abs_diff_eq!(c.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_negative_variance() {
        assert_eq!(
            difference_from_moments(1.0, -0.1, 0.0, 0.1),
            Err(NormalizeError::InvalidVariance(-0.1))
        );
        assert!(difference_from_moments(1.0, f64::INFINITY, 0.0, 0.1).is_err());
    }

    #[test]
    fn pooled_effect_is_weighted_sum() {
        let v = pooled_estimate(&[0.1, 0.2, 0.4], &[0.5, 0.3, 0.2]).unwrap();
        assert_relative_eq!(v, 0.05 + 0.06 + 0.08, epsilon = 1e-12);

        assert!(matches!(
            pooled_estimate(&[0.1, 0.2], &[1.0]),
            Err(NormalizeError::MismatchedInputs { .. })
        ));
        assert_eq!(
            pooled_estimate::<f64>(&[], &[]),
            Err(NormalizeError::EmptyInput("estimates"))
        );
    }
}
