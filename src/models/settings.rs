//! Settings Models
//!
//! Application configuration and settings data structures.

use std::time::Duration;

use recruiter_check_client::{
    normalize_base_url, ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS,
};
use recruiter_check_core::ProxyConfig;
use serde::{Deserialize, Serialize};

/// Upper bound for `request_timeout_secs`
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Application configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the analysis service
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bound on one analysis exchange, in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Optional outbound proxy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
    /// Color terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_timeout_secs(),
            proxy: None,
            color: default_color(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub color: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.api_url.is_none() && self.request_timeout_secs.is_none() && self.color.is_none()
    }
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(api_url) = update.api_url {
            self.api_url = api_url;
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        normalize_base_url(&self.api_url).map_err(|e| e.to_string())?;

        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(format!(
                "request_timeout_secs must be between 1 and {}",
                MAX_TIMEOUT_SECS
            ));
        }

        if let Some(proxy) = &self.proxy {
            proxy.validate()?;
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connection settings for the analysis client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
            .with_timeout(self.request_timeout())
            .with_proxy(self.proxy.clone())
    }
}
