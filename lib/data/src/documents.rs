//! Shapes of the precomputed JSON documents
//!
//! These mirror the files the export pipeline publishes next to the site.
//! `last_updated` is written by the pipeline as a naive ISO-8601 local
//! timestamp, so it maps to [`NaiveDateTime`] rather than an offset-aware
//! type.

use chrono::NaiveDateTime;
use onview_core::FeatureBounds;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `analysis_stats.json` - aggregate statistics over the test split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub last_updated: NaiveDateTime,
    pub total_items: u64,
    pub accuracy: f64,
    pub distribution: Distribution,
    #[serde(default)]
    pub by_department: Vec<DepartmentStats>,
    #[serde(default)]
    pub by_century: Vec<CenturyStats>,
    pub errors: ErrorBreakdown,
}

/// On-view vs. not-on-view counts and shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub on_view: u64,
    pub not_on_view: u64,
    pub on_view_percentage: f64,
    pub not_on_view_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: String,
    pub count: u64,
    pub on_view_rate: f64,
    pub avg_prediction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenturyStats {
    /// Century bucket, e.g. `1800` for 1800-1899. Negative for BCE.
    pub century: i64,
    pub count: u64,
    pub on_view_rate: f64,
}

/// Prediction error counts over the test split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBreakdown {
    pub correct: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub error_rate: f64,
}

/// `model_metadata.json` - static facts about the deployed model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub version: String,
    pub last_updated: NaiveDateTime,
    pub model_type: String,
    pub num_features: u64,
    pub metrics: ModelMetrics,
    #[serde(default)]
    pub top_features: Vec<FeatureImportance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub name: String,
    pub importance: f64,
}

/// One entry of `feature_ranges.json`.
///
/// The pipeline mixes two kinds of values in one map: numeric bounds for
/// date-like fields and option lists for categorical fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureRangeEntry {
    Bounds(FeatureBounds),
    Options(Vec<String>),
}

/// The full `feature_ranges.json` document.
pub type FeatureRangeDoc = HashMap<String, FeatureRangeEntry>;

/// Extract only the numeric bounds, the part the validator consumes.
pub fn numeric_ranges(doc: &FeatureRangeDoc) -> onview_core::FeatureRanges {
    doc.iter()
        .filter_map(|(name, entry)| match entry {
            FeatureRangeEntry::Bounds(bounds) => Some((name.clone(), *bounds)),
            FeatureRangeEntry::Options(_) => None,
        })
        .collect()
}

/// `underrated_items.json` - artworks the model scores highly that are
/// nonetheless not on display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderratedItems {
    pub last_updated: NaiveDateTime,
    pub count: u64,
    pub items: Vec<UnderratedItem>,
}

/// One high-confidence false positive.
///
/// The pipeline writes the optional metadata loosely (dates may appear as
/// floats), so the date fields are `f64` here rather than years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderratedItem {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub predicted_probability: f64,
    /// Link to the museum's collection page for the object.
    pub met_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(
        rename = "objectBeginDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub object_begin_date: Option<f64>,
    #[serde(
        rename = "objectEndDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub object_end_date: Option<f64>,
    #[serde(rename = "objectName", default, skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,
}
