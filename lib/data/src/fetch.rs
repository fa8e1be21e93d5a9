//! Loader for the published JSON documents
//!
//! Thin read-only HTTP wrapper: each operation GETs one document from the
//! static file server and deserializes it. Errors name the document so the
//! message can be shown directly.

use crate::documents::{AnalysisStats, FeatureRangeDoc, ModelMetadata, UnderratedItems};
use onview_core::Record;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors from fetching or decoding a published document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to load {document}: {source}")]
    Http {
        document: &'static str,
        source: reqwest::Error,
    },

    #[error("Failed to load {document}: HTTP {status}")]
    Status {
        document: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Invalid document URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// Read-only client for the site's precomputed data documents.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    client: Client,
    base_url: Url,
}

impl ResourceClient {
    /// Client rooted at the site's base URL; documents live under
    /// `{base}/data/`. A base without a trailing slash gets one, so a site
    /// served under a path prefix keeps that prefix when document paths
    /// are joined.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, document: &'static str) -> Result<T, FetchError> {
        let url = self.base_url.join(&format!("data/{document}"))?;
        debug!(%url, "fetching document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http { document, source })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                document,
                status: response.status(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| FetchError::Http { document, source })
    }

    /// Aggregate statistics for the summary charts.
    pub async fn analysis_stats(&self) -> Result<AnalysisStats, FetchError> {
        self.fetch("analysis_stats.json").await
    }

    /// Static model-quality metrics for the dashboard.
    pub async fn model_metadata(&self) -> Result<ModelMetadata, FetchError> {
        self.fetch("model_metadata.json").await
    }

    /// The labeled reference pool for the fallback predictor.
    pub async fn sample_items(&self) -> Result<Vec<Record>, FetchError> {
        self.fetch("predictions_sample.json").await
    }

    /// Valid ranges and option lists for the prediction form.
    pub async fn feature_ranges(&self) -> Result<FeatureRangeDoc, FetchError> {
        self.fetch("feature_ranges.json").await
    }

    /// High-confidence false positives worth a second look.
    pub async fn underrated_items(&self) -> Result<UnderratedItems, FetchError> {
        self.fetch("underrated_items.json").await
    }
}
