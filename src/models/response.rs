//! Response Types
//!
//! Standard response types returned by the command handlers and printed by
//! the CLI in `--json` mode.

use recruiter_check_core::{present, ResultView};
use serde::{Deserialize, Serialize};

use crate::services::analysis::{Phase, RequestState};

/// Generic command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response with message
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Create a failed response that still carries data
    pub fn failed(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: Some(message.into()),
        }
    }
}

impl<T> From<Result<T, crate::utils::error::AppError>> for CommandResponse<T> {
    fn from(result: Result<T, crate::utils::error::AppError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(e.to_string()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub endpoint: String,
    pub reachable: bool,
}

impl HealthResponse {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            status: "unknown".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "recruiter-check".to_string(),
            endpoint: endpoint.into(),
            reachable: false,
        }
    }
}

/// Outcome of one analysis submission
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Text that was submitted, after trimming
    pub text: String,
    /// Orchestrator state once the submission resolved
    pub state: RequestState,
    /// Display data, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ResultView>,
}

impl AnalysisReport {
    pub fn new(text: impl Into<String>, state: RequestState) -> Self {
        let view = state.result().map(present);
        Self {
            text: text.into(),
            state,
            view,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
}
