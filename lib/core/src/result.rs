//! Prediction output contract
//!
//! [`PredictionResult`] is the sole externally observable artifact of a
//! prediction call. It is constructed once and never mutated afterwards by
//! the core; the orchestrator only fills in the provenance annotations
//! before handing it to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Three-way verdict over a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    OnView,
    NotOnView,
    Uncertain,
}

/// Coarse trust label derived from average neighbor similarity, or passed
/// through from the remote model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// How a prediction was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// The hosted model answered.
    Api,
    /// Local similarity-weighted k-NN fallback.
    Knn,
}

/// Summary of one neighbor shown alongside a fallback prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarItem {
    pub title: String,
    pub department: String,
    /// Formatted percent string with one decimal, e.g. `"42.5%"`.
    pub similarity: String,
    pub probability: String,
}

/// Result of a prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Estimated probability the artwork is on public display, in [0, 1].
    pub probability: f64,
    pub prediction: Verdict,
    pub confidence: Confidence,
    /// Human-readable summary suitable for direct display.
    pub message: String,
    /// Top-K neighbor summaries in rank order; empty for API results and
    /// for the insufficient-evidence response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar_items: Vec<SimilarItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Opaque explanation payload passed through from the remote model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Value>,
}

impl PredictionResult {
    /// Create a result with no provenance annotations.
    pub fn new(
        probability: f64,
        prediction: Verdict,
        confidence: Confidence,
        message: impl Into<String>,
    ) -> Self {
        Self {
            probability,
            prediction,
            confidence,
            message: message.into(),
            similar_items: Vec::new(),
            method: None,
            source: None,
            warning: None,
            explanation: None,
        }
    }
}
