//! R bindings for rdnorm.
//!
//! Provides R access to the normalizers via extendr.

use extendr_api::prelude::*;

use crate::api::{
    BoundaryPoint, MultiCutoff, MultiScore, NormalizedScore, Normalizer, TieBreak,
};
use crate::primitives::exclusion::Exclusion;

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse the quadrant tie-break policy from a string
fn parse_tie_break(name: &str) -> Result<TieBreak> {
    match name.to_lowercase().as_str() {
        "last" | "last_match" | "reference" => Ok(TieBreak::LastMatch),
        "first" | "first_match" => Ok(TieBreak::FirstMatch),
        _ => Err(Error::Other(format!(
            "Unknown tie break: {}. Valid options: last_match, first_match",
            name
        ))),
    }
}

/// 1-based R index of a row, `None` past the range of an R integer.
fn one_based(row: usize) -> Option<i32> {
    row.checked_add(1).and_then(|i| i32::try_from(i).ok())
}

/// 1-based R indices of `rows`.
fn r_indices(rows: impl Iterator<Item = usize>) -> Result<Vec<i32>> {
    rows.map(|row| {
        one_based(row).ok_or_else(|| {
            Error::Other(format!("row index {} exceeds the R integer range", row))
        })
    })
    .collect()
}

fn exclusions_to_list(excluded: &[Exclusion]) -> Result<List> {
    let rows = r_indices(excluded.iter().map(|e| e.row))?;
    let reasons: Vec<String> = excluded.iter().map(|e| e.reason.to_string()).collect();
    let list = List::from_names_and_values(["row", "reason"], [rows.into_robj(), reasons.into_robj()])?;
    Ok(list)
}

fn normalized_to_list(result: NormalizedScore<f64>) -> Result<List> {
    let rows = r_indices(result.rows.iter().copied())?;
    let list_items: Vec<(&str, Robj)> = vec![
        ("xnorm", result.xnorm.into_robj()),
        ("rows", rows.into_robj()),
        ("excluded", exclusions_to_list(&result.excluded)?.into_robj()),
    ];

    let names: Vec<&str> = list_items.iter().map(|(k, _)| *k).collect();
    let values: Vec<Robj> = list_items.into_iter().map(|(_, v)| v).collect();
    let result_list = List::from_names_and_values(names, values)?;

    Ok(result_list)
}

// ============================================================================
// R Functions
// ============================================================================

/// Normalize a score against per-group cutoffs.
///
/// @param x Numeric vector of raw scores.
/// @param groups Character vector of group labels, one per score.
/// @param labels Character vector of mapped group labels.
/// @param cutoffs Numeric vector of cutoffs, one per label.
/// @return A list with `xnorm` (NaN where unmapped or missing) and `excluded`.
/// @export
#[extendr]
fn normalize_cutoffs(
    x: &[f64],
    groups: Vec<String>,
    labels: Vec<String>,
    cutoffs: &[f64],
) -> Result<List> {
    if labels.len() != cutoffs.len() {
        return Err(Error::Other(format!(
            "labels has {} entries but cutoffs has {}",
            labels.len(),
            cutoffs.len()
        )));
    }

    let normalizer = Normalizer::<f64>::new()
        .adapter(MultiCutoff)
        .cutoffs(labels.into_iter().zip(cutoffs.iter().copied()))
        .build()
        .map_err(|e| Error::Other(e.to_string()))?;

    let result = normalizer
        .normalize(x, &groups)
        .map_err(|e| Error::Other(e.to_string()))?;

    let list = List::from_names_and_values(
        ["xnorm", "excluded"],
        [
            result.to_column().into_robj(),
            exclusions_to_list(&result.excluded)?.into_robj(),
        ],
    )?;
    Ok(list)
}

/// Signed perpendicular distance to a two-cutoff boundary.
///
/// @param r1 First centered running variable.
/// @param r2 Second centered running variable.
/// @param tr Treatment indicator (0/1).
/// @param tie_break Axis tie policy: "last_match" (default) or "first_match".
/// @return A list with `xnorm`, 1-based `rows` kept, and `excluded`.
/// @export
#[extendr]
fn normalize_perpendicular(r1: &[f64], r2: &[f64], tr: &[f64], tie_break: &str) -> Result<List> {
    let tb = parse_tie_break(tie_break)?;

    let result = Normalizer::<f64>::new()
        .tie_break(tb)
        .adapter(MultiScore)
        .build()
        .map_err(|e| Error::Other(e.to_string()))?
        .normalize(r1, r2, tr)
        .map_err(|e| Error::Other(e.to_string()))?;

    normalized_to_list(result)
}

/// Signed distance to one boundary point.
///
/// @param r1 First running variable.
/// @param r2 Second running variable.
/// @param tr Treatment indicator (0/1).
/// @param dim1 Boundary point coordinate on `r1`.
/// @param dim2 Boundary point coordinate on `r2`.
/// @return A list with `xnorm`, 1-based `rows` kept, and `excluded`.
/// @export
#[extendr]
fn normalize_point(r1: &[f64], r2: &[f64], tr: &[f64], dim1: f64, dim2: f64) -> Result<List> {
    let result = Normalizer::<f64>::new()
        .adapter(MultiScore)
        .build()
        .map_err(|e| Error::Other(e.to_string()))?
        .distance_to_point(r1, r2, tr, BoundaryPoint::new(dim1, dim2))
        .map_err(|e| Error::Other(e.to_string()))?;

    normalized_to_list(result)
}

// ============================================================================
// Module Registration
// ============================================================================

extendr_module! {
    mod rdnorm;
    fn normalize_cutoffs;
    fn normalize_perpendicular;
    fn normalize_point;
}
