//! Similarity-weighted k-nearest-neighbor fallback predictor
//!
//! Ranks a pool of labeled reference records by similarity to a query,
//! takes the top K, and produces a probability estimate weighted by each
//! neighbor's similarity. A weak match is not an error: when the selected
//! neighbors average below [`MIN_AVG_SIMILARITY`] the predictor returns a
//! fixed "uncertain" response instead of a weighted estimate.

use crate::error::{Error, Result};
use crate::record::Record;
use crate::result::{Confidence, PredictionResult, SimilarItem, Verdict};
use crate::similarity;
use tracing::debug;

/// Default neighbor count used by the orchestrator.
pub const DEFAULT_K: usize = 5;

/// Average similarity below which evidence is considered insufficient.
///
/// Below this threshold the result is the fixed uncertain response with a
/// 0.5 probability, irrespective of neighbor labels. Deliberate product
/// decision; the exact threshold matters.
pub const MIN_AVG_SIMILARITY: f64 = 0.10;

/// A reference record paired with its similarity to the query.
#[derive(Debug, Clone)]
struct ScoredNeighbor<'a> {
    record: &'a Record,
    similarity: f64,
    probability: f64,
}

/// Predict from the `k` most similar labeled reference records.
///
/// Records without a `predicted_probability` cannot vote and are filtered
/// out before scoring.
///
/// # Errors
/// [`Error::EmptyPool`] if no usable records remain,
/// [`Error::InvalidK`] if `k` is zero.
pub fn predict(query: &Record, pool: &[Record], k: usize) -> Result<PredictionResult> {
    if k == 0 {
        return Err(Error::InvalidK(k));
    }

    let mut scored: Vec<ScoredNeighbor<'_>> = pool
        .iter()
        .filter_map(|record| {
            record.predicted_probability.map(|probability| ScoredNeighbor {
                record,
                similarity: similarity::score(query, record),
                probability,
            })
        })
        .collect();

    if scored.is_empty() {
        return Err(Error::EmptyPool);
    }

    // Stable sort: ties keep pool order.
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(k);

    let avg_similarity =
        scored.iter().map(|n| n.similarity).sum::<f64>() / scored.len() as f64;

    if avg_similarity < MIN_AVG_SIMILARITY {
        debug!(avg_similarity, "matches too weak, returning uncertain");
        return Ok(PredictionResult::new(
            0.5,
            Verdict::Uncertain,
            Confidence::Low,
            "Not enough similar items found. Prediction may be unreliable.",
        ));
    }

    let total_weight: f64 = scored.iter().map(|n| n.similarity).sum();
    // The average check above makes a zero sum unreachable; guard anyway.
    if total_weight <= 0.0 {
        return Err(Error::EmptyPool);
    }
    let probability = scored
        .iter()
        .map(|n| n.probability * n.similarity)
        .sum::<f64>()
        / total_weight;

    let confidence = if avg_similarity > 0.5 {
        Confidence::High
    } else if avg_similarity > 0.3 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let prediction = if probability > 0.5 {
        Verdict::OnView
    } else {
        Verdict::NotOnView
    };

    let similar_items: Vec<SimilarItem> = scored
        .iter()
        .map(|n| SimilarItem {
            title: unknown_if_missing(&n.record.title),
            department: unknown_if_missing(&n.record.department),
            similarity: format_percent(n.similarity),
            probability: format_percent(n.probability),
        })
        .collect();

    let mut result = PredictionResult::new(
        probability,
        prediction,
        confidence,
        // Count reflects the neighbors actually used, which can be fewer
        // than k when the pool is small.
        format!(
            "Prediction based on {} similar items (avg similarity: {:.1}%)",
            scored.len(),
            avg_similarity * 100.0
        ),
    );
    result.similar_items = similar_items;
    Ok(result)
}

fn unknown_if_missing(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "Unknown".to_string())
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
