//! Remote-first prediction with local k-NN fallback
//!
//! One attempt against the hosted model under the configured timeout; on
//! any failure the orchestrator branches to the local neighbor predictor
//! if a reference pool is available, and otherwise surfaces a terminal
//! error. No retries, no backoff, at most one remote call in flight per
//! invocation. Each call is independent and reentrant; the pool is only
//! ever read.

use crate::api::{ApiPrediction, ModelApiClient};
use crate::config::ClientConfig;
use onview_core::{predictor, Error, Method, PredictionResult, Record, Result};
use tracing::warn;

const API_SOURCE: &str = "hosted model API";
const KNN_SOURCE: &str = "k-nearest neighbors (fallback)";
const API_UNAVAILABLE_WARNING: &str = "API unavailable, using similarity-based prediction";

/// Coordinates the remote model call and the local fallback.
pub struct PredictionOrchestrator {
    client: ModelApiClient,
}

impl PredictionOrchestrator {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ModelApiClient::new(config)?,
        })
    }

    /// Wrap an existing client.
    pub fn from_client(client: ModelApiClient) -> Self {
        Self { client }
    }

    /// Predict for one record: try the API, fall back to k-NN over `pool`.
    ///
    /// Results carry a `method` tag (`api` or `knn`) plus `source`, and a
    /// `warning` when the fallback was used.
    ///
    /// # Errors
    /// [`Error::NoFallbackAvailable`] when the API is down and no pool was
    /// supplied (or it is empty); [`Error::EmptyPool`] when a pool was
    /// supplied but holds no labeled records.
    pub async fn predict(
        &self,
        query: &Record,
        pool: Option<&[Record]>,
    ) -> Result<PredictionResult> {
        match self.client.predict(query).await {
            Ok(api) => Ok(tag_api_result(api)),
            Err(err) => {
                warn!(error = %err, "API prediction failed, falling back to k-NN");

                let pool = pool
                    .filter(|p| !p.is_empty())
                    .ok_or(Error::NoFallbackAvailable)?;

                let mut result = predictor::predict(query, pool, predictor::DEFAULT_K)?;
                result.method = Some(Method::Knn);
                result.source = Some(KNN_SOURCE.to_string());
                result.warning = Some(API_UNAVAILABLE_WARNING.to_string());
                Ok(result)
            }
        }
    }

    /// Batch predict via the API. Batch mode has no local fallback: if the
    /// call fails, the whole batch fails.
    pub async fn predict_batch(&self, queries: &[Record]) -> Result<Vec<ApiPrediction>> {
        self.client.predict_batch(queries).await
    }

    /// Probe the service's health endpoint. Independent of the predict
    /// path; shares no state with concurrent predictions.
    pub async fn health(&self) -> bool {
        self.client.health().await
    }
}

fn tag_api_result(api: ApiPrediction) -> PredictionResult {
    let mut result = PredictionResult::new(
        api.probability,
        api.prediction,
        api.confidence,
        "Prediction from hosted model",
    );
    result.method = Some(Method::Api);
    result.source = Some(API_SOURCE.to_string());
    result.explanation = api.explanation;
    result
}
