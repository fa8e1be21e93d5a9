//! # onview-client
//!
//! Remote model API client and prediction orchestrator for the on-view
//! demo.
//!
//! The orchestrator tries the hosted model first, bounded by a timeout,
//! and falls back to the local k-NN predictor from `onview-core` when the
//! service is unreachable:
//!
//! ```text
//! query ──> ModelApiClient ──ok──> result (method = "api")
//!                │
//!              error
//!                ▼
//!        reference pool? ──yes──> NeighborPredictor (method = "knn")
//!                │
//!               no
//!                ▼
//!        NoFallbackAvailable
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use onview_client::{ClientConfig, PredictionOrchestrator};
//! use onview_core::Record;
//!
//! # async fn run() -> onview_core::Result<()> {
//! let config = ClientConfig::new("https://model.example.com".parse().unwrap());
//! let orchestrator = PredictionOrchestrator::new(config)?;
//!
//! let query = Record {
//!     department: Some("European Paintings".to_string()),
//!     ..Record::default()
//! };
//! let result = orchestrator.predict(&query, None).await?;
//! println!("{}: {:.0}%", result.message, result.probability * 100.0);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod orchestrate;

// Re-export main types for convenience
pub use api::{ApiPrediction, ModelApiClient, PredictRequest, MAX_BATCH_SIZE};
pub use config::{ClientConfig, DEFAULT_HEALTH_TIMEOUT, DEFAULT_TIMEOUT};
pub use orchestrate::PredictionOrchestrator;
