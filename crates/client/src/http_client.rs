//! HTTP Client Factory
//!
//! Builds the `reqwest::Client` used for every exchange with the analysis
//! service, applying the request timeout and optional proxy.

use std::time::Duration;

use recruiter_check_core::ProxyConfig;

use crate::types::{ClientError, ClientResult};

/// Build a `reqwest::Client` with the given timeout and proxy.
///
/// - `Some(proxy)` -> route all traffic through the proxy
/// - `None` -> explicitly disable proxy (`no_proxy`), ignoring env vars
pub fn build_http_client(
    proxy: Option<&ProxyConfig>,
    timeout: Duration,
) -> ClientResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout);
    match proxy {
        Some(cfg) => {
            cfg.validate().map_err(ClientError::invalid_config)?;
            let mut p = reqwest::Proxy::all(cfg.url())
                .map_err(|e| ClientError::invalid_config(format!("invalid proxy URL: {}", e)))?;
            if let Some((user, password)) = cfg.basic_auth() {
                p = p.basic_auth(user, password);
            }
            builder = builder.proxy(p);
        }
        None => {
            builder = builder.no_proxy();
        }
    }
    builder
        .build()
        .map_err(|e| ClientError::invalid_config(format!("failed to build HTTP client: {}", e)))
}
