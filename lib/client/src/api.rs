//! HTTP client for the hosted prediction service
//!
//! Wraps the three endpoints the demo consumes: `POST /predict`,
//! `POST /predict/batch` and `GET /health`. Any transport failure,
//! timeout or non-success status on the predict paths maps to
//! [`Error::RemoteUnavailable`]; deciding whether a fallback applies is
//! the orchestrator's job, not this client's.

use crate::config::ClientConfig;
use onview_core::{Confidence, Error, Record, Result, Verdict};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Maximum number of items in one batch request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Request body for `POST /predict`.
///
/// Absent fields serialize as `null`, as the service expects.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub text: String,
    pub department: Option<String>,
    #[serde(rename = "objectBeginDate")]
    pub object_begin_date: Option<i64>,
    #[serde(rename = "objectEndDate")]
    pub object_end_date: Option<i64>,
    pub classification: Option<String>,
    pub culture: Option<String>,
    pub medium: Option<String>,
}

impl PredictRequest {
    /// Build the request for one record, including the text summary the
    /// model embeds.
    pub fn from_record(record: &Record) -> Self {
        Self {
            text: summarize(record),
            department: record.department.clone(),
            object_begin_date: record.object_begin_date,
            object_end_date: record.object_end_date,
            classification: record.classification.clone(),
            culture: record.culture.clone(),
            medium: record.medium.clone(),
        }
    }
}

/// Comma-joined natural-text summary of a record's populated fields.
///
/// The date segment only appears when both years are known.
fn summarize(record: &Record) -> String {
    let mut parts = Vec::new();

    if let Some(medium) = &record.medium {
        parts.push(medium.clone());
    }
    if let Some(classification) = &record.classification {
        parts.push(classification.clone());
    }
    if let Some(culture) = &record.culture {
        parts.push(format!("from {culture} culture"));
    }
    if let (Some(begin), Some(end)) = (record.object_begin_date, record.object_end_date) {
        parts.push(format!("dated {begin}-{end}"));
    }
    if let Some(department) = &record.department {
        parts.push(format!("in {department} department"));
    }

    if parts.is_empty() {
        "artwork".to_string()
    } else {
        parts.join(", ")
    }
}

/// Successful response from the predict endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPrediction {
    pub probability: f64,
    pub prediction: Verdict,
    pub confidence: Confidence,
    #[serde(default)]
    pub explanation: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct BatchResponse {
    predictions: Vec<ApiPrediction>,
}

/// HTTP client for the hosted prediction model.
#[derive(Debug, Clone)]
pub struct ModelApiClient {
    client: Client,
    config: ClientConfig,
}

impl ModelApiClient {
    /// Create a client with the predict timeout built into the connection.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &url::Url {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> Result<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Predict on-view probability for one record.
    pub async fn predict(&self, record: &Record) -> Result<ApiPrediction> {
        let url = self.endpoint("predict")?;
        debug!(%url, "sending predict request");

        let response = self
            .client
            .post(url)
            .json(&PredictRequest::from_record(record))
            .send()
            .await
            .map_err(remote_unavailable)?;

        if !response.status().is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "API error: {}",
                response.status()
            )));
        }

        response.json().await.map_err(remote_unavailable)
    }

    /// Predict for 1-100 records in one call.
    ///
    /// The size check runs before any network traffic. Results come back
    /// in input order; there is no per-item or local fallback, so a failed
    /// batch call fails whole.
    pub async fn predict_batch(&self, records: &[Record]) -> Result<Vec<ApiPrediction>> {
        if records.is_empty() || records.len() > MAX_BATCH_SIZE {
            return Err(Error::BatchSize(records.len()));
        }

        let requests: Vec<PredictRequest> =
            records.iter().map(PredictRequest::from_record).collect();

        let url = self.endpoint("predict/batch")?;
        debug!(%url, items = records.len(), "sending batch predict request");

        let response = self
            .client
            .post(url)
            .json(&requests)
            .send()
            .await
            .map_err(remote_unavailable)?;

        if !response.status().is_success() {
            return Err(Error::RemoteUnavailable(format!(
                "Batch API error: {}",
                response.status()
            )));
        }

        let body: BatchResponse = response.json().await.map_err(remote_unavailable)?;
        Ok(body.predictions)
    }

    /// Liveness probe with its own short timeout. Never errors; anything
    /// other than a 2xx within the budget reads as unhealthy.
    pub async fn health(&self) -> bool {
        let Ok(url) = self.endpoint("health") else {
            return false;
        };
        match self
            .client
            .get(url)
            .timeout(self.config.health_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

fn remote_unavailable(err: reqwest::Error) -> Error {
    Error::RemoteUnavailable(err.to_string())
}
