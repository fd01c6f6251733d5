//! End-to-end tests of the public normalizers.

use approx::assert_relative_eq;
use ndarray::Array1;
use rdnorm::prelude::*;

fn multiscore(tie_break: TieBreak) -> MultiScoreNormalizer<f64> {
    Normalizer::new()
        .tie_break(tie_break)
        .adapter(MultiScore)
        .build()
        .unwrap()
}

fn sisben() -> MultiCutoffNormalizer<f64> {
    Normalizer::new()
        .adapter(MultiCutoff)
        .cutoffs([
            ("Main metro area", -57.21),
            ("Other urban area", -56.32),
            ("Rural area", -40.75),
        ])
        .build()
        .unwrap()
}

/// Deterministic grid of score pairs covering all quadrants and both axes.
fn grid() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let steps = [-7.5, -2.0, -0.25, 0.0, 0.25, 2.0, 7.5];
    let mut r1 = Vec::new();
    let mut r2 = Vec::new();
    let mut tr = Vec::new();
    for (i, &a) in steps.iter().enumerate() {
        for (j, &b) in steps.iter().enumerate() {
            r1.push(a);
            r2.push(b);
            tr.push(((i + j) % 2) as f64);
        }
    }
    (r1, r2, tr)
}

#[test]
fn concrete_scenarios() {
    let r1 = vec![3.0, -3.0, -3.0, f64::NAN];
    let r2 = vec![4.0, -4.0, 4.0, 4.0];
    let tr = vec![1.0, 0.0, 0.0, 1.0];

    let out = multiscore(TieBreak::LastMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();

    assert_eq!(out.xnorm, vec![3.0, -5.0, -3.0]);
    assert_eq!(out.rows, vec![0, 1, 2]);
    assert_eq!(out.n_input, 4);
    assert_eq!(
        out.excluded,
        vec![Exclusion {
            row: 3,
            reason: ExclusionReason::MissingScore
        }]
    );

    let cut = sisben()
        .normalize(&vec![-60.0], &["Main metro area"])
        .unwrap();
    assert_relative_eq!(cut.xnorm[0].unwrap(), -2.79, epsilon = 1e-12);
}

#[test]
fn sign_follows_treatment() {
    let (r1, r2, tr) = grid();
    let out = multiscore(TieBreak::LastMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();
    assert_eq!(out.len(), r1.len());

    for (k, &row) in out.rows.iter().enumerate() {
        let v = out.xnorm[k];
        let sign = 2.0 * tr[row] - 1.0;
        if v != 0.0 {
            assert_eq!(v.signum(), sign, "row {}", row);
        }
    }
}

#[test]
fn quadrant_distance_properties() {
    let (r1, r2, tr) = grid();
    let out = multiscore(TieBreak::LastMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();

    for (k, &row) in out.rows.iter().enumerate() {
        let (a, b) = (r1[row], r2[row]);
        let d = out.xnorm[k].abs();
        if a > 0.0 && b > 0.0 {
            assert_eq!(d, a.abs().min(b.abs()));
        }
        if a <= 0.0 && b <= 0.0 {
            assert_relative_eq!(d, (a * a + b * b).sqrt(), epsilon = 1e-12);
        }
        if a < 0.0 && b > 0.0 {
            assert_eq!(d, a.abs());
        }
        if a > 0.0 && b < 0.0 {
            assert_eq!(d, b.abs());
        }
    }
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let (r1, r2, tr) = grid();
    let seq = Normalizer::<f64>::new()
        .parallel(false)
        .adapter(MultiScore)
        .build()
        .unwrap()
        .normalize(&r1, &r2, &tr)
        .unwrap();
    let par = Normalizer::<f64>::new()
        .parallel(true)
        .adapter(MultiScore)
        .build()
        .unwrap()
        .normalize(&r1, &r2, &tr)
        .unwrap();
    assert_eq!(seq, par);

    let again = multiscore(TieBreak::LastMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();
    assert_eq!(seq, again);
}

#[test]
fn tie_policies_agree_on_distance() {
    let (r1, r2, tr) = grid();
    let last = multiscore(TieBreak::LastMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();
    let first = multiscore(TieBreak::FirstMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();

    // On an axis every matching rule reduces to the distance to that axis.
    assert_eq!(last.rows, first.rows);
    for k in 0..last.len() {
        assert_relative_eq!(last.xnorm[k], first.xnorm[k], epsilon = 1e-12);
    }
}

#[test]
fn accepts_ndarray_columns() {
    let r1 = Array1::from(vec![3.0, -3.0]);
    let r2 = Array1::from(vec![4.0, -4.0]);
    let tr = Array1::from(vec![1.0, 0.0]);
    let out = multiscore(TieBreak::LastMatch)
        .normalize(&r1, &r2, &tr)
        .unwrap();
    assert_eq!(out.xnorm, vec![3.0, -5.0]);
}

#[test]
fn row_failures_do_not_abort_the_batch() {
    let x = vec![-60.0, f64::NAN, -41.0, -70.0];
    let groups = ["Main metro area", "Rural area", "Nowhere", "Other urban area"];
    let out = sisben().normalize(&x, &groups).unwrap();

    assert!(out.xnorm[0].is_some());
    assert_eq!(out.xnorm[1], None);
    assert_eq!(out.xnorm[2], None);
    assert_relative_eq!(out.xnorm[3].unwrap(), -13.68, epsilon = 1e-12);

    let reasons: Vec<ExclusionReason> = out.excluded.iter().map(|e| e.reason).collect();
    assert_eq!(
        reasons,
        vec![ExclusionReason::MissingScore, ExclusionReason::UnmappedGroup]
    );

    let complete = out.complete();
    assert_eq!(complete.rows, vec![0, 3]);
}

#[test]
fn pooled_normalized_score_feeds_an_estimator() {
    struct Jump;

    impl RdEstimator<f64> for Jump {
        type Error = NormalizeError;

        fn estimate(
            &self,
            outcome: &[f64],
            score: &[f64],
            cutoff: f64,
        ) -> Result<Estimate<f64>, NormalizeError> {
            let mean = |pred: &dyn Fn(f64) -> bool| {
                let ys: Vec<f64> = score
                    .iter()
                    .zip(outcome)
                    .filter(|&(&s, _)| pred(s))
                    .map(|(_, &y)| y)
                    .collect();
                ys.iter().sum::<f64>() / ys.len() as f64
            };
            let right = mean(&|s| s >= cutoff);
            let left = mean(&|s| s < cutoff);
            Ok(Estimate {
                point_estimate: right - left,
                standard_error: 0.1,
                ci_lower: right - left - 0.196,
                ci_upper: right - left + 0.196,
                bandwidth_left: 1.0,
                bandwidth_right: 1.0,
                n_left: score.iter().filter(|&&s| s < cutoff).count(),
                n_right: score.iter().filter(|&&s| s >= cutoff).count(),
            })
        }
    }

    let x = vec![-58.0, -56.0, -57.0, -55.0, -41.0, -40.0, -90.0];
    let groups = [
        "Main metro area",
        "Main metro area",
        "Other urban area",
        "Other urban area",
        "Rural area",
        "Rural area",
        "Abroad",
    ];
    let y = vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 50.0];

    let scored = sisben().normalize(&x, &groups).unwrap().complete();
    let est = scored.estimate_with(&Jump, &y).unwrap();

    assert_eq!(est.n_left, 3);
    assert_eq!(est.n_right, 3);
    assert_relative_eq!(est.point_estimate, 1.0, epsilon = 1e-12);
}

#[test]
fn cutoff_contrast_workflow() {
    let a = Estimate {
        point_estimate: 0.3,
        standard_error: 0.03,
        ci_lower: 0.24,
        ci_upper: 0.36,
        bandwidth_left: 10.0,
        bandwidth_right: 10.0,
        n_left: 500,
        n_right: 400,
    };
    let b = Estimate {
        point_estimate: 0.2,
        standard_error: 0.04,
        ..a
    };
    let c = difference_test(&a, &b).unwrap();
    assert_relative_eq!(c.t_stat, 2.0, epsilon = 1e-9);
    assert!(c.p_value > 0.04 && c.p_value < 0.05);

    let pooled = pooled_estimate(&[a.point_estimate, b.point_estimate], &[0.6, 0.4]).unwrap();
    assert_relative_eq!(pooled, 0.26, epsilon = 1e-12);
}

#[test]
fn mass_point_summary() {
    let x = vec![-0.5, -0.5, 0.0, 0.0, 0.0, 0.5, f64::NAN];
    let y = vec![1.0, 3.0, 2.0, 4.0, 6.0, 8.0, 1.0];
    let summary = ScoreSummary::from_scores(&x);
    assert_eq!(summary.non_missing, 6);
    assert_eq!(summary.distinct, 3);

    let collapsed = collapse_by_score(&x, &y).unwrap();
    assert_eq!(collapsed.score, vec![-0.5, 0.0, 0.5]);
    assert_eq!(collapsed.mean, vec![2.0, 4.0, 8.0]);
    assert_eq!(collapsed.len(), 3);
}
