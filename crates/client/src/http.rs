//! HTTP Analysis Client
//!
//! Implementation of the AnalysisService trait for the JSON-over-HTTP
//! analysis API (`POST /analyze`, `GET /` for health).

use async_trait::async_trait;
use recruiter_check_core::{AnalysisRequest, AnalysisResult};
use tracing::{debug, warn};
use url::Url;

use crate::http_client::build_http_client;
use crate::service::{transport_error, AnalysisService};
use crate::types::{ClientConfig, ClientError, ClientResult, ANALYZE_PATH};

/// Client for the analysis service's HTTP API
pub struct HttpAnalysisClient {
    base_url: String,
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    /// Create a new client from the given configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let endpoint = format!("{}{}", base_url, ANALYZE_PATH);
        let client = build_http_client(config.proxy.as_ref(), config.timeout)?;
        Ok(Self {
            base_url,
            endpoint,
            client,
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Validate a base URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> ClientResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ClientError::invalid_config(format!("invalid API URL '{}': {}", raw, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ClientError::invalid_config(format!(
            "unsupported URL scheme '{}' in '{}'",
            other, raw
        ))),
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    fn name(&self) -> &'static str {
        "http"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn analyze(&self, request: &AnalysisRequest) -> ClientResult<AnalysisResult> {
        debug!(
            endpoint = %self.endpoint,
            bytes = request.text().len(),
            "sending analysis request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| transport_error(&e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "analysis service returned an error status");
            return Err(ClientError::api(status.as_u16(), body_text));
        }

        let result = AnalysisResult::from_json(&body_text)
            .map_err(|e| ClientError::parse(e.to_string()))?;
        debug!(
            score = result.score,
            level = %result.level,
            flags = result.flags.len(),
            "analysis received"
        );
        Ok(result)
    }

    async fn health_check(&self) -> ClientResult<()> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.map_err(|e| transport_error(&e))?;
            Err(ClientError::api(status.as_u16(), body))
        }
    }
}
