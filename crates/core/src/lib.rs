//! Recruiter Check Core
//!
//! The result contract consumed from the external analysis service and the
//! pure presentation logic derived from it. This crate has no dependencies on
//! the HTTP client, the terminal front end, or the runtime.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `contract` - Request / result shapes and their invariants
//! - `presenter` - Result to risk presentation mapping
//! - `proxy` - Proxy configuration data types shared with the client crate

pub mod contract;
pub mod error;
pub mod presenter;
pub mod proxy;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Result Contract ────────────────────────────────────────────────────
pub use contract::{AnalysisRequest, AnalysisResult, Highlight, RiskLevel, MAX_SCORE, MIN_SCORE};

// ── Presentation ───────────────────────────────────────────────────────
pub use presenter::{
    highlight_spans, present, BadgeColorKey, BadgePalette, ResultView, TextSpan,
    EMPTY_FLAGS_MESSAGE,
};

// ── Proxy Types ────────────────────────────────────────────────────────
pub use proxy::{ProxyConfig, ProxyProtocol};
