//! Recruiter Check Client
//!
//! Talks to the external scam-detection service. The orchestrator only sees
//! the `AnalysisService` trait; `HttpAnalysisClient` is the production
//! implementation over reqwest.

pub mod http;
pub mod http_client;
pub mod service;
pub mod types;

// Re-export main types
pub use http::{normalize_base_url, HttpAnalysisClient};
pub use http_client::build_http_client;
pub use service::AnalysisService;
pub use types::*;
