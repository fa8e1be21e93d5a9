//! # onview-core
//!
//! Data model and local fallback predictor for the on-view demo.
//!
//! This crate holds everything that works without I/O: the [`Record`] data
//! model, the weighted [`similarity`] scorer, the k-NN [`predictor`] used
//! when the hosted model is unreachable, and the [`validate::validate`]
//! pre-check for user queries.
//!
//! ## Example
//!
//! ```rust
//! use onview_core::{predictor, Record};
//!
//! let query = Record {
//!     department: Some("European Paintings".to_string()),
//!     object_begin_date: Some(1800),
//!     ..Record::default()
//! };
//!
//! let pool = vec![Record {
//!     department: Some("European Paintings".to_string()),
//!     object_begin_date: Some(1810),
//!     title: Some("Portrait of a Lady".to_string()),
//!     predicted_probability: Some(0.9),
//!     ..Record::default()
//! }];
//!
//! let result = predictor::predict(&query, &pool, predictor::DEFAULT_K).unwrap();
//! assert!(result.probability > 0.5);
//! ```

pub mod error;
pub mod predictor;
pub mod record;
pub mod result;
pub mod similarity;
pub mod validate;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use record::{FeatureBounds, FeatureRanges, Record};
pub use result::{Confidence, Method, PredictionResult, SimilarItem, Verdict};
pub use validate::{validate, Validation};
