//! # onview
//!
//! Client library for an art-collection "on view" prediction demo.
//!
//! Given a partially filled artwork record, onview produces a predicted
//! probability that the piece is on public display. It asks a hosted
//! model first, bounded by a timeout, and degrades to a local
//! similarity-weighted k-nearest-neighbors estimate over a small labeled
//! sample when the service is unreachable.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use onview::prelude::*;
//!
//! # async fn run() -> onview_core::Result<()> {
//! let config = ClientConfig::new("https://model.example.com".parse().unwrap());
//! let orchestrator = PredictionOrchestrator::new(config)?;
//!
//! let query = Record {
//!     department: Some("European Paintings".to_string()),
//!     object_begin_date: Some(1800),
//!     ..Record::default()
//! };
//!
//! // With no reference pool, a dead API is a hard failure;
//! // pass Some(pool) to enable the k-NN fallback.
//! let result = orchestrator.predict(&query, None).await?;
//! println!("{:?}: {:.1}%", result.prediction, result.probability * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! onview is composed of several crates:
//!
//! - `onview-core` - data model, similarity scorer, k-NN fallback
//!   predictor, input validation
//! - `onview-client` - hosted-model API client and the remote-vs-fallback
//!   orchestrator
//! - `onview-data` - loader for the precomputed JSON documents the site
//!   renders

// Re-export core types
pub use onview_core::{
    predictor, similarity, validate, Confidence, Error, FeatureBounds, FeatureRanges, Method,
    PredictionResult, Record, Result, SimilarItem, Validation, Verdict,
};

// Re-export client
pub use onview_client::{ApiPrediction, ClientConfig, ModelApiClient, PredictionOrchestrator};

// Re-export data loader
pub use onview_data::{
    numeric_ranges, AnalysisStats, FetchError, ModelMetadata, ResourceClient, UnderratedItems,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiPrediction, ClientConfig, Confidence, Error, FeatureRanges, Method, ModelApiClient,
        PredictionOrchestrator, PredictionResult, Record, ResourceClient, Result, Validation,
        Verdict,
    };
}
