use async_trait::async_trait;
use paddock_core::models::{Driver, PredictionRequest, PredictionResult, RaceDescriptor, RaceId};
use paddock_core::ports::PredictionService;
use paddock_core::{PaddockError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Message used when a failed response carries no `detail`
const FALLBACK_DETAIL: &str = "Failed to get prediction";

/// Prediction service reached over HTTP
pub struct HttpPredictionService {
    /// Base URL of the service (e.g., "http://localhost:8000")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpPredictionService {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create with default localhost URL
    pub fn localhost() -> Self {
        Self::new("http://localhost:8000")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn unavailable(&self, err: reqwest::Error) -> PaddockError {
        PaddockError::ServiceUnavailable {
            reason: format!("Failed to connect to {}: {}", self.base_url, err),
            remediation: format!(
                "Ensure the prediction service is running at {} or set PADDOCK_API_URL",
                self.base_url
            ),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(url = %self.url(path), "GET");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;
        read_json(response).await
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn list_races(&self, year: i32) -> Result<Vec<RaceDescriptor>> {
        let envelope: RacesEnvelope = self.get_json(&format!("/races?year={}", year)).await?;
        tracing::debug!(year, count = envelope.races.len(), "Fetched races");
        Ok(envelope.races)
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>> {
        let envelope: DriversEnvelope = self.get_json("/drivers").await?;
        Ok(envelope.drivers)
    }

    async fn predict_race(&self, race_id: RaceId) -> Result<PredictionResult> {
        match self.get_json(&format!("/predict/{}", race_id)).await {
            Err(PaddockError::Upstream { status: 404, .. }) => {
                Err(PaddockError::RaceNotFound { race_id: race_id.0 })
            }
            other => other,
        }
    }

    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        tracing::debug!(url = %self.url("/predict"), "POST");
        let response = self
            .client
            .post(self.url("/predict"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;
        read_json(response).await
    }
}

#[derive(Debug, Deserialize)]
struct RacesEnvelope {
    #[serde(default)]
    races: Vec<RaceDescriptor>,
}

#[derive(Debug, Deserialize)]
struct DriversEnvelope {
    #[serde(default)]
    drivers: Vec<Driver>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(|e| PaddockError::ServiceUnavailable {
        reason: format!("Failed to read response body: {}", e),
        remediation: "Check the prediction service logs".to_string(),
    })?;

    if !status.is_success() {
        return Err(upstream_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        PaddockError::Serialization(format!("Unexpected prediction service response: {}", e))
    })
}

/// Error for a non-success response, using the body's `detail` when present
fn upstream_error(status: StatusCode, body: &str) -> PaddockError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| match d {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| FALLBACK_DETAIL.to_string());

    tracing::warn!(status = status.as_u16(), detail = %detail, "Prediction service error");
    PaddockError::Upstream { status: status.as_u16(), detail }
}
