//! Analysis Service Trait
//!
//! Defines the interface the request orchestrator uses to reach the external
//! scam-detection service.

use async_trait::async_trait;
use recruiter_check_core::{AnalysisRequest, AnalysisResult};

use crate::types::{ClientError, ClientResult};

/// Trait that every analysis backend must implement.
///
/// Provides a unified interface for:
/// - Analysing one message (analyze)
/// - Health checking
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Returns the service name for identification.
    fn name(&self) -> &'static str;

    /// Returns the endpoint requests are sent to, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Analyze one message.
    ///
    /// Performs exactly one exchange with the service. Fails with
    /// `NetworkError`, `ApiError` or `ParseError`.
    async fn analyze(&self, request: &AnalysisRequest) -> ClientResult<AnalysisResult>;

    /// Check that the service is reachable.
    async fn health_check(&self) -> ClientResult<()>;
}

/// Classify a transport-level failure from reqwest.
pub fn transport_error(err: &reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::network(format!("request timed out ({})", err))
    } else if err.is_connect() {
        ClientError::network(format!("connection failed ({})", err))
    } else {
        ClientError::network(err.to_string())
    }
}
