//! Artwork records and feature-range types
//!
//! A [`Record`] is both the query shape a user fills in and the reference
//! shape published in `predictions_sample.json`. The museum metadata is
//! sparse, so every field is optional; the "missing vs. present" branch in
//! each similarity term is an explicit `Option` match, not a truthiness
//! check.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single artwork record.
///
/// Field names follow the published JSON exactly (camelCase, except
/// `predicted_probability` which the generator writes in snake_case).
/// Reference records carry `predicted_probability`, the model score used
/// for weighting in the fallback predictor; query records leave it unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Year the object was begun. Negative for BCE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_begin_date: Option<i64>,

    /// Year the object was finished; at or after the begin year when both
    /// are present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_end_date: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Model probability attached to sample items.
    #[serde(
        rename = "predicted_probability",
        skip_serializing_if = "Option::is_none"
    )]
    pub predicted_probability: Option<f64>,
}

impl Record {
    /// Whether this record can act as a neighbor in the fallback predictor.
    pub fn is_labeled(&self) -> bool {
        self.predicted_probability.is_some()
    }
}

/// Valid numeric bounds for a date-like feature, from `feature_ranges.json`.
///
/// The generator writes the bounds as floats; the median is informational
/// and unused by validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
}

/// Feature name to bounds, for the fields the validator checks.
pub type FeatureRanges = HashMap<String, FeatureBounds>;
