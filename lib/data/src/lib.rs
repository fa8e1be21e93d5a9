//! # onview-data
//!
//! Loader for the precomputed JSON documents the demo site renders:
//! analysis statistics, model metadata, the labeled sample pool, feature
//! ranges for form validation, and the underrated-items list. All
//! documents are produced externally by the export pipeline; this crate
//! only fetches and types them.

pub mod documents;
pub mod fetch;

// Re-export main types for convenience
pub use documents::{
    numeric_ranges, AnalysisStats, CenturyStats, DepartmentStats, Distribution, ErrorBreakdown,
    FeatureImportance, FeatureRangeDoc, FeatureRangeEntry, ModelMetadata, ModelMetrics,
    UnderratedItem, UnderratedItems,
};
pub use fetch::{FetchError, ResourceClient};
