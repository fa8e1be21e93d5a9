//! Similarity scoring between artwork records
//!
//! Computes a weighted similarity in range [0.0, 1.0] over a fixed feature
//! set. Each term contributes a non-negative amount capped by its weight,
//! and the weights sum to 1.0, so the total is bounded by construction.

use crate::record::Record;
use std::collections::HashSet;

/// Weight of an exact department match.
pub const DEPARTMENT_WEIGHT: f64 = 0.30;
/// Weight of begin-date proximity.
pub const DATE_WEIGHT: f64 = 0.20;
/// Weight of an exact classification match.
pub const CLASSIFICATION_WEIGHT: f64 = 0.15;
/// Weight of an exact medium match.
pub const MEDIUM_WEIGHT: f64 = 0.15;
/// Weight of an exact culture match.
pub const CULTURE_WEIGHT: f64 = 0.10;
/// Weight of object-name token overlap.
pub const NAME_WEIGHT: f64 = 0.10;

/// Date gap, in years, at which the date term decays to zero.
pub const MAX_DATE_GAP_YEARS: f64 = 2000.0;

/// Calculate similarity between a query record and a reference record.
///
/// Similarity only accrues from fields present on both sides; a missing
/// field contributes nothing. Pure function of its two inputs.
///
/// # Returns
/// Similarity score in [0.0, 1.0]
pub fn score(query: &Record, reference: &Record) -> f64 {
    let mut score = 0.0;

    if exact_match(&query.department, &reference.department) {
        score += DEPARTMENT_WEIGHT;
    }

    if let (Some(a), Some(b)) = (query.object_begin_date, reference.object_begin_date) {
        score += date_proximity(a, b);
    }

    if exact_match(&query.classification, &reference.classification) {
        score += CLASSIFICATION_WEIGHT;
    }

    if exact_match(&query.medium, &reference.medium) {
        score += MEDIUM_WEIGHT;
    }

    if exact_match(&query.culture, &reference.culture) {
        score += CULTURE_WEIGHT;
    }

    if let (Some(a), Some(b)) = (&query.object_name, &reference.object_name) {
        score += NAME_WEIGHT * jaccard_tokens(a, b);
    }

    score
}

fn exact_match(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

/// Begin-date proximity term: linear decay to zero at a 2000-year gap,
/// clamped at zero beyond that.
pub fn date_proximity(a: i64, b: i64) -> f64 {
    let gap = (a - b).abs() as f64;
    (DATE_WEIGHT * (1.0 - gap / MAX_DATE_GAP_YEARS)).max(0.0)
}

/// Jaccard similarity between lower-cased whitespace token sets.
///
/// Returns 0.0 when either side has no tokens.
pub fn jaccard_tokens(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}
