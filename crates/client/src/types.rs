//! Client Types
//!
//! Error taxonomy and configuration for talking to the analysis service.

use std::time::Duration;

use recruiter_check_core::ProxyConfig;
use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the analysis endpoint, relative to the base URL
pub const ANALYZE_PATH: &str = "/analyze";

/// Default bound on a single exchange with the service
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error types for analysis requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientError {
    /// No response was obtained (refused, DNS, timeout, truncated body)
    NetworkError { message: String },
    /// The service answered with a non-success status
    ApiError { status: u16, body: String },
    /// The success body does not conform to the result contract
    ParseError { message: String },
    /// The client could not be constructed from its configuration
    InvalidConfig { message: String },
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::NetworkError {
            message: message.into(),
        }
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        ClientError::ApiError {
            status,
            body: body.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ClientError::ParseError {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        ClientError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::NetworkError { .. } => "network_error",
            ClientError::ApiError { .. } => "api_error",
            ClientError::ParseError { .. } => "parse_error",
            ClientError::InvalidConfig { .. } => "invalid_config",
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::NetworkError { message } => write!(f, "Network error: {}", message),
            ClientError::ApiError { status, body } => write!(f, "API error {}: {}", status, body),
            ClientError::ParseError { message } => write!(f, "Parse error: {}", message),
            ClientError::InvalidConfig { message } => {
                write!(f, "Invalid client configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Connection settings for the analysis service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub proxy: Option<ProxyConfig>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<ProxyConfig>) -> Self {
        self.proxy = proxy;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
        }
    }
}
