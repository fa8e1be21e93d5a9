//! Query validation against published feature ranges
//!
//! Checks a query record before prediction is attempted. Validation never
//! fails: every violation is collected so a form can present all problems
//! at once.

use crate::record::{FeatureBounds, FeatureRanges, Record};
use serde::Serialize;

/// Outcome of validating a query record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate a query record.
///
/// Rules: department is required; each date, when present, must fall
/// within its declared bounds; the end date must not precede the begin
/// date. Dates are already typed integers on [`Record`], so malformed
/// values are rejected at deserialization, before this check runs.
pub fn validate(query: &Record, ranges: &FeatureRanges) -> Validation {
    let mut errors = Vec::new();

    if query.department.is_none() {
        errors.push("Department is required".to_string());
    }

    check_date(
        query.object_begin_date,
        "Object Begin Date",
        ranges.get("objectBeginDate"),
        &mut errors,
    );
    check_date(
        query.object_end_date,
        "Object End Date",
        ranges.get("objectEndDate"),
        &mut errors,
    );

    if let (Some(begin), Some(end)) = (query.object_begin_date, query.object_end_date) {
        if end < begin {
            errors.push("Object End Date must be after Begin Date".to_string());
        }
    }

    Validation {
        valid: errors.is_empty(),
        errors,
    }
}

fn check_date(
    value: Option<i64>,
    label: &str,
    bounds: Option<&FeatureBounds>,
    errors: &mut Vec<String>,
) {
    if let (Some(date), Some(bounds)) = (value, bounds) {
        let date = date as f64;
        if date < bounds.min || date > bounds.max {
            errors.push(format!(
                "{label} must be between {} and {}",
                bounds.min, bounds.max
            ));
        }
    }
}
