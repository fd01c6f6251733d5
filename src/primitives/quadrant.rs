//! Quadrant classification of a two-dimensional score.
//!
//! ## Purpose
//!
//! In a two-score design each running variable is centered at its own cutoff,
//! so the signs of `(r1, r2)` place an observation in one of four quadrants.
//! The applicable boundary distance depends on that quadrant.
//!
//! ## Key concepts
//!
//! ### Overlapping predicates
//!
//! The quadrant predicates are inclusive (`>= 0` / `<= 0`), so a point with a
//! zero component satisfies more than one rule. `(0, 4)` matches both the
//! first and the second quadrant; `(0, 0)` matches all four.
//!
//! ### Decision list
//!
//! The rules are kept in an explicit ordered list, [`QUADRANT_RULES`], in
//! evaluation order 1, 2, 3, 4. Which matching rule wins is a [`TieBreak`]:
//!
//! * [`TieBreak::LastMatch`] (default): the last matching rule in list order
//!   wins. This reproduces sequential column overwrites in rule order, so
//!   `(0, 4)` is quadrant 2 and `(0, 0)` is quadrant 4.
//! * [`TieBreak::FirstMatch`]: the first matching rule wins.
//!
//! Away from the axes exactly one rule matches and both policies agree.
//!
//! ## Invariants
//!
//! * Classification fails only when no rule matches, i.e. when a component
//!   is NaN. Signed zero is treated as zero.

use core::fmt;
use num_traits::Float;

/// One of the four sign combinations of `(r1, r2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// `r1 >= 0, r2 >= 0`: treated on both dimensions.
    First,

    /// `r1 <= 0, r2 >= 0`.
    Second,

    /// `r1 >= 0, r2 <= 0`.
    Third,

    /// `r1 <= 0, r2 <= 0`: outside both treatment regions.
    Fourth,
}

impl Quadrant {
    /// Numeric quadrant code in `1..=4`.
    pub fn code(self) -> u8 {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.code())
    }
}

/// Required sign of one score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Component `>= 0`.
    NonNegative,

    /// Component `<= 0`.
    NonPositive,
}

impl Side {
    #[inline]
    fn holds<T: Float>(self, value: T) -> bool {
        match self {
            Side::NonNegative => value >= T::zero(),
            Side::NonPositive => value <= T::zero(),
        }
    }
}

/// A single entry of the quadrant decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantRule {
    /// Quadrant assigned when the rule matches.
    pub quadrant: Quadrant,

    /// Required sign of `r1`.
    pub r1: Side,

    /// Required sign of `r2`.
    pub r2: Side,
}

impl QuadrantRule {
    /// Whether `(r1, r2)` satisfies both inclusive predicates.
    #[inline]
    pub fn matches<T: Float>(&self, r1: T, r2: T) -> bool {
        self.r1.holds(r1) && self.r2.holds(r2)
    }
}

/// Quadrant rules in evaluation order.
pub const QUADRANT_RULES: [QuadrantRule; 4] = [
    QuadrantRule {
        quadrant: Quadrant::First,
        r1: Side::NonNegative,
        r2: Side::NonNegative,
    },
    QuadrantRule {
        quadrant: Quadrant::Second,
        r1: Side::NonPositive,
        r2: Side::NonNegative,
    },
    QuadrantRule {
        quadrant: Quadrant::Third,
        r1: Side::NonNegative,
        r2: Side::NonPositive,
    },
    QuadrantRule {
        quadrant: Quadrant::Fourth,
        r1: Side::NonPositive,
        r2: Side::NonPositive,
    },
];

/// Which matching rule wins when a point lies on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The last matching rule in evaluation order wins.
    #[default]
    LastMatch,

    /// The first matching rule in evaluation order wins.
    FirstMatch,
}

/// Classify `(r1, r2)` into a quadrant.
///
/// Returns `None` only when no rule matches (a NaN component).
pub fn classify<T: Float>(r1: T, r2: T, tie_break: TieBreak) -> Option<Quadrant> {
    let hit = |rule: &&QuadrantRule| rule.matches(r1, r2);
    let rule = match tie_break {
        TieBreak::LastMatch => QUADRANT_RULES.iter().rev().find(hit),
        TieBreak::FirstMatch => QUADRANT_RULES.iter().find(hit),
    };
    rule.map(|r| r.quadrant)
}

/// Every quadrant whose rule `(r1, r2)` satisfies, in evaluation order.
pub fn matches<T: Float>(r1: T, r2: T) -> Vec<Quadrant> {
    QUADRANT_RULES
        .iter()
        .filter(|rule| rule.matches(r1, r2))
        .map(|rule| rule.quadrant)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_points_have_one_quadrant() {
        for tie in [TieBreak::LastMatch, TieBreak::FirstMatch] {
            assert_eq!(classify(3.0, 4.0, tie), Some(Quadrant::First));
            assert_eq!(classify(-3.0, 4.0, tie), Some(Quadrant::Second));
            assert_eq!(classify(3.0, -4.0, tie), Some(Quadrant::Third));
            assert_eq!(classify(-3.0, -4.0, tie), Some(Quadrant::Fourth));
        }
        assert_eq!(matches(3.0, 4.0), vec![Quadrant::First]);
    }

    #[test]
    fn axis_points_follow_last_match() {
        let last = TieBreak::LastMatch;
        assert_eq!(classify(0.0, 4.0, last), Some(Quadrant::Second));
        assert_eq!(classify(3.0, 0.0, last), Some(Quadrant::Third));
        assert_eq!(classify(0.0, -4.0, last), Some(Quadrant::Fourth));
        assert_eq!(classify(-3.0, 0.0, last), Some(Quadrant::Fourth));
        assert_eq!(classify(0.0, 0.0, last), Some(Quadrant::Fourth));
        assert_eq!(classify(-0.0, 0.0, last), Some(Quadrant::Fourth));
    }

    #[test]
    fn axis_points_follow_first_match() {
        let first = TieBreak::FirstMatch;
        assert_eq!(classify(0.0, 4.0, first), Some(Quadrant::First));
        assert_eq!(classify(3.0, 0.0, first), Some(Quadrant::First));
        assert_eq!(classify(0.0, -4.0, first), Some(Quadrant::Third));
        assert_eq!(classify(-3.0, 0.0, first), Some(Quadrant::Second));
        assert_eq!(classify(0.0, 0.0, first), Some(Quadrant::First));
    }

    #[test]
    fn origin_matches_every_rule() {
        assert_eq!(
            matches(0.0_f64, 0.0),
            vec![
                Quadrant::First,
                Quadrant::Second,
                Quadrant::Third,
                Quadrant::Fourth
            ]
        );
    }

    #[test]
    fn nan_is_unclassified() {
        assert_eq!(classify(f64::NAN, 1.0, TieBreak::LastMatch), None);
        assert_eq!(classify(1.0, f64::NAN, TieBreak::FirstMatch), None);
        assert!(matches(f64::NAN, f64::NAN).is_empty());
    }

    #[test]
    fn codes() {
        assert_eq!(Quadrant::Fourth.code(), 4);
        assert_eq!(Quadrant::Second.to_string(), "Q2");
    }
}
