//! Treatment indicator handling.
//!
//! A treatment column arrives as a numeric 0/1 indicator (often loaded from a
//! delimited file, so it may also contain missing values). [`Treatment`]
//! turns one indicator value into a side of the boundary and supplies the
//! `2 * tr - 1` sign used to orient a distance.

use num_traits::Float;

/// Side of the boundary an observation was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treatment {
    /// Indicator equal to 1.
    Treated,

    /// Indicator equal to 0.
    Control,
}

/// Outcome of reading a single indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// A valid 0/1 indicator.
    Valid(Treatment),

    /// The indicator is missing (NaN).
    Missing,

    /// The indicator is present but is neither 0 nor 1.
    Invalid,
}

impl Treatment {
    /// Read a numeric indicator value.
    pub fn from_indicator<T: Float>(value: T) -> Indicator {
        if value.is_nan() {
            Indicator::Missing
        } else if value == T::one() {
            Indicator::Valid(Treatment::Treated)
        } else if value == T::zero() {
            Indicator::Valid(Treatment::Control)
        } else {
            Indicator::Invalid
        }
    }

    /// The `2 * tr - 1` multiplier: `+1` for treated, `-1` for control.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Treatment::Treated => T::one(),
            Treatment::Control => -T::one(),
        }
    }

    /// Attach the treatment sign to an unsigned distance.
    #[inline]
    pub fn apply<T: Float>(self, distance: T) -> T {
        distance * self.sign::<T>()
    }

    /// Whether this is the treated side.
    pub fn is_treated(self) -> bool {
        matches!(self, Treatment::Treated)
    }
}

impl From<bool> for Treatment {
    fn from(treated: bool) -> Self {
        if treated {
            Treatment::Treated
        } else {
            Treatment::Control
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_indicators() {
        assert_eq!(
            Treatment::from_indicator(1.0_f64),
            Indicator::Valid(Treatment::Treated)
        );
        assert_eq!(
            Treatment::from_indicator(0.0_f64),
            Indicator::Valid(Treatment::Control)
        );
        assert_eq!(
            Treatment::from_indicator(-0.0_f64),
            Indicator::Valid(Treatment::Control)
        );
        assert_eq!(Treatment::from_indicator(f64::NAN), Indicator::Missing);
        assert_eq!(Treatment::from_indicator(0.5_f32), Indicator::Invalid);
        assert_eq!(Treatment::from_indicator(2.0_f64), Indicator::Invalid);
    }

    #[test]
    fn sign_matches_two_tr_minus_one() {
        assert_eq!(Treatment::Treated.sign::<f64>(), 2.0 * 1.0 - 1.0);
        assert_eq!(Treatment::Control.sign::<f64>(), 2.0 * 0.0 - 1.0);
        assert_eq!(Treatment::Control.apply(5.0_f64), -5.0);
        assert_eq!(Treatment::from(true), Treatment::Treated);
    }
}
