//! Multi-score adapter.
//!
//! ## Purpose
//!
//! This module provides the batch processor for designs with two running
//! variables. It reduces each score pair to one signed running variable that
//! a single-score RD estimator can use:
//!
//! * perpendicular distance to the boundary formed by both cutoffs,
//! * Euclidean distance to one or more boundary points,
//! * treatment signing of a distance computed elsewhere (geographic designs).
//!
//! ## Design notes
//!
//! * Every method validates column alignment, then runs one row pass.
//! * Rows with a missing score or treatment indicator are left out of the
//!   result and listed in its `excluded` records, never zero-filled.
//! * The quadrant tie-break policy comes from the shared builder.
//!
//! ## Invariants
//!
//! * The sign of every kept value equals `2 * tr - 1` (or the value is 0).

use log::debug;
use num_traits::Float;

use crate::algorithms::point::{self, BoundaryPoint};
use crate::algorithms::{perpendicular, signing};
use crate::api::NormalizerBuilder;
use crate::engine::executor::{gather_kept, row_pass};
use crate::engine::output::NormalizedScore;
use crate::engine::validator::Validator;
use crate::primitives::errors::NormalizeError;
use crate::primitives::input::ScoreInput;
use crate::primitives::quadrant::{self, Quadrant, TieBreak};

// ============================================================================
// Builder
// ============================================================================

/// Builder for the multi-score normalizer.
#[derive(Debug, Clone)]
pub struct MultiScoreBuilder<T> {
    /// Run row passes in parallel.
    pub parallel: bool,

    /// Quadrant tie-break policy.
    pub tie_break: TieBreak,

    /// First parameter set more than once, here or on the shared builder.
    pub(crate) duplicate_param: Option<&'static str>,

    parallel_set: bool,

    _float: core::marker::PhantomData<T>,
}

impl<T: Float> MultiScoreBuilder<T> {
    pub(crate) fn from_shared(shared: NormalizerBuilder<T>) -> Self {
        Self {
            parallel: shared.parallel_or_default(),
            tie_break: shared.tie_break_or_default(),
            duplicate_param: shared.duplicate_param,
            parallel_set: shared.parallel.is_some(),
            _float: core::marker::PhantomData,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel_set = true;
        self.parallel = parallel;
        self
    }

    /// Build the normalizer.
    pub fn build(self) -> Result<MultiScoreNormalizer<T>, NormalizeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(MultiScoreNormalizer {
            parallel: self.parallel,
            tie_break: self.tie_break,
            _float: core::marker::PhantomData,
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Multi-score normalizer.
#[derive(Debug, Clone, Copy)]
pub struct MultiScoreNormalizer<T> {
    parallel: bool,
    tie_break: TieBreak,
    _float: core::marker::PhantomData<T>,
}

impl<T: Float + Send + Sync> MultiScoreNormalizer<T> {
    /// The quadrant tie-break policy in use.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    fn columns<'a, I1, I2, I3>(
        r1: &'a I1,
        r2: &'a I2,
        tr: &'a I3,
    ) -> Result<(&'a [T], &'a [T], &'a [T]), NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
        I3: ScoreInput<T> + ?Sized,
    {
        let r1 = r1.as_score_slice()?;
        let r2 = r2.as_score_slice()?;
        let tr = tr.as_score_slice()?;
        Validator::validate_lengths(&[("r1", r1.len()), ("r2", r2.len()), ("tr", tr.len())])?;
        Ok((r1, r2, tr))
    }

    /// Signed perpendicular distance to the two-cutoff boundary.
    ///
    /// `r1` and `r2` are centered at their own cutoffs, positive on the
    /// treated side. `tr` is the 0/1 treatment indicator.
    pub fn normalize<I1, I2, I3>(
        &self,
        r1: &I1,
        r2: &I2,
        tr: &I3,
    ) -> Result<NormalizedScore<T>, NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
        I3: ScoreInput<T> + ?Sized,
    {
        let (r1, r2, tr) = Self::columns(r1, r2, tr)?;
        let tie_break = self.tie_break;
        let outcomes = row_pass(r1.len(), self.parallel, |i| {
            perpendicular::normalize_row(r1[i], r2[i], tr[i], tie_break)
        });
        Ok(gather_kept("perpendicular", outcomes))
    }

    /// Quadrant of every row, `None` where a component is missing.
    pub fn quadrants<I1, I2>(&self, r1: &I1, r2: &I2) -> Result<Vec<Option<Quadrant>>, NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
    {
        let r1 = r1.as_score_slice()?;
        let r2 = r2.as_score_slice()?;
        Validator::validate_lengths(&[("r1", r1.len()), ("r2", r2.len())])?;
        let tie_break = self.tie_break;
        Ok(row_pass(r1.len(), self.parallel, |i| {
            quadrant::classify(r1[i], r2[i], tie_break)
        }))
    }

    /// Signed Euclidean distance to one boundary point.
    pub fn distance_to_point<I1, I2, I3>(
        &self,
        r1: &I1,
        r2: &I2,
        tr: &I3,
        point: BoundaryPoint<T>,
    ) -> Result<NormalizedScore<T>, NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
        I3: ScoreInput<T> + ?Sized,
    {
        let (r1, r2, tr) = Self::columns(r1, r2, tr)?;
        let outcomes = row_pass(r1.len(), self.parallel, |i| {
            point::normalize_row(r1[i], r2[i], tr[i], point)
        });
        Ok(gather_kept("boundary point", outcomes))
    }

    /// Signed distances to each of several boundary points, in order.
    pub fn distances_to_points<I1, I2, I3>(
        &self,
        r1: &I1,
        r2: &I2,
        tr: &I3,
        points: &[BoundaryPoint<T>],
    ) -> Result<Vec<NormalizedScore<T>>, NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
        I3: ScoreInput<T> + ?Sized,
    {
        if points.is_empty() {
            return Err(NormalizeError::EmptyInput("boundary points"));
        }
        debug!("distances to {} boundary points", points.len());
        points
            .iter()
            .map(|&p| self.distance_to_point(r1, r2, tr, p))
            .collect()
    }

    /// Sign a precomputed distance column by treatment.
    pub fn sign_distances<I1, I2>(
        &self,
        distance: &I1,
        tr: &I2,
    ) -> Result<NormalizedScore<T>, NormalizeError>
    where
        I1: ScoreInput<T> + ?Sized,
        I2: ScoreInput<T> + ?Sized,
    {
        let distance = distance.as_score_slice()?;
        let tr = tr.as_score_slice()?;
        Validator::validate_lengths(&[("distance", distance.len()), ("tr", tr.len())])?;
        let outcomes = row_pass(distance.len(), self.parallel, |i| {
            signing::sign_by_treatment(distance[i], tr[i])
        });
        Ok(gather_kept("signed distance", outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MultiScore, Normalizer};
    use crate::primitives::exclusion::ExclusionReason;

    fn normalizer() -> MultiScoreNormalizer<f64> {
        Normalizer::new()
            .parallel(false)
            .adapter(MultiScore)
            .build()
            .unwrap()
    }

    #[test]
    fn perpendicular_batch() {
        let r1 = [3.0, -3.0, -3.0, f64::NAN, 0.0];
        let r2 = [4.0, -4.0, 4.0, 4.0, -2.0];
        let tr = [1.0, 0.0, 0.0, 1.0, 0.0];
        let out = normalizer().normalize(&r1[..], &r2[..], &tr[..]).unwrap();

        assert_eq!(out.xnorm, vec![3.0, -5.0, -3.0, -2.0]);
        assert_eq!(out.rows, vec![0, 1, 2, 4]);
        assert_eq!(out.excluded_for(ExclusionReason::MissingScore), 1);
        assert_eq!(out.excluded[0].row, 3);
    }

    #[test]
    fn first_match_policy_is_configurable() {
        let n: MultiScoreNormalizer<f64> = Normalizer::new()
            .tie_break(TieBreak::FirstMatch)
            .adapter(MultiScore)
            .build()
            .unwrap();
        assert_eq!(n.tie_break(), TieBreak::FirstMatch);
        let q = n.quadrants(&[0.0][..], &[-2.0][..]).unwrap();
        assert_eq!(q, vec![Some(Quadrant::Third)]);

        let q = normalizer().quadrants(&[0.0, f64::NAN][..], &[-2.0, 1.0][..]).unwrap();
        assert_eq!(q, vec![Some(Quadrant::Fourth), None]);
    }

    #[test]
    fn distances_to_boundary_points() {
        let r1 = [33.0, 27.0];
        let r2 = [4.0, -4.0];
        let tr = [1.0, 0.0];
        let points = [
            BoundaryPoint::new(0.0, 0.0),
            BoundaryPoint::new(30.0, 0.0),
            BoundaryPoint::new(0.0, 50.0),
        ];
        let outs = normalizer()
            .distances_to_points(&r1[..], &r2[..], &tr[..], &points)
            .unwrap();
        assert_eq!(outs.len(), 3);
        assert_eq!(outs[1].xnorm, vec![5.0, -5.0]);
        assert!(normalizer()
            .distances_to_points(&r1[..], &r2[..], &tr[..], &[])
            .is_err());
    }

    #[test]
    fn signs_precomputed_distances() {
        let d = [1.5, 2.0, 0.25];
        let tr = [1.0, 0.0, 2.0];
        let out = normalizer().sign_distances(&d[..], &tr[..]).unwrap();
        assert_eq!(out.xnorm, vec![1.5, -2.0]);
        assert_eq!(out.excluded_for(ExclusionReason::InvalidTreatment), 1);
    }

    #[test]
    fn parallel_set_twice_across_builders_is_rejected() {
        let err = Normalizer::<f64>::new()
            .parallel(true)
            .adapter(MultiScore)
            .parallel(false)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            NormalizeError::DuplicateParameter {
                parameter: "parallel"
            }
        );

        let n = Normalizer::<f64>::new()
            .adapter(MultiScore)
            .parallel(false)
            .build();
        assert!(n.is_ok());
    }

    #[test]
    fn misaligned_columns_abort() {
        let err = normalizer()
            .normalize(&[1.0, 2.0][..], &[1.0][..], &[1.0, 0.0][..])
            .unwrap_err();
        assert!(matches!(err, NormalizeError::MismatchedInputs { .. }));
    }
}
