//! Proxy Configuration Types
//!
//! Optional outbound proxy for the analysis client. The settings file carries
//! it; the HTTP client factory in `recruiter-check-client` applies it.

use serde::{Deserialize, Serialize};

/// Proxy protocol type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    Http,
    Https,
    Socks5,
}

impl ProxyProtocol {
    /// Return the URL scheme string for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks5 => "socks5",
        }
    }
}

/// Proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyConfig {
    pub protocol: ProxyProtocol,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Build the proxy URL string (without auth).
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol.scheme(), self.host, self.port)
    }

    /// Credentials, when both halves are configured
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some((u.as_str(), p.as_str())),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("proxy host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("proxy port must be non-zero".to_string());
        }
        if self.password.is_some() && self.username.is_none() {
            return Err("proxy password set without a username".to_string());
        }
        Ok(())
    }
}
