//! Analysis Contract
//!
//! Shapes exchanged with the external analysis service. The service owns the
//! scoring rules; this module only enforces what the client is allowed to
//! send and what a response must contain to be displayed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CoreError, CoreResult};

/// Lowest score the service may report
pub const MIN_SCORE: i64 = 0;

/// Highest score the service may report
pub const MAX_SCORE: i64 = 100;

/// Body of `POST /analyze`.
///
/// Can only be built from text that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    /// Build a request from user text, trimming surrounding whitespace.
    pub fn new(text: &str) -> CoreResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::validation("message text is empty"));
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Risk level reported by the service.
///
/// Unknown strings are kept verbatim in `Unrecognized` so a result always
/// decodes and re-encodes unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unrecognized(String),
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unrecognized(raw) => raw,
        }
    }

    /// Whether the level is one of the three the service documents
    pub fn is_recognized(&self) -> bool {
        !matches!(self, RiskLevel::Unrecognized(_))
    }
}

impl From<String> for RiskLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Low" => RiskLevel::Low,
            "Medium" => RiskLevel::Medium,
            "High" => RiskLevel::High,
            _ => RiskLevel::Unrecognized(raw),
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(raw: &str) -> Self {
        RiskLevel::from(raw.to_string())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phrase of the original message implicated by one or more flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub phrase: String,
}

impl Highlight {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }
}

/// Verdict returned by the analysis service for one message.
///
/// `score`, `level` and `flags` are required; `highlights` defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: i64,
    pub level: RiskLevel,
    pub flags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl AnalysisResult {
    pub fn new(score: i64, level: impl Into<RiskLevel>, flags: Vec<String>) -> Self {
        Self {
            score,
            level: level.into(),
            flags,
            highlights: Vec::new(),
        }
    }

    pub fn with_highlights(mut self, highlights: Vec<Highlight>) -> Self {
        self.highlights = highlights;
        self
    }

    /// Decode and validate a response body.
    ///
    /// Missing or mistyped required fields are a contract violation. An
    /// out-of-range score or an unknown level is tolerated and logged.
    pub fn from_json(body: &str) -> CoreResult<Self> {
        let result: AnalysisResult = serde_json::from_str(body)
            .map_err(|e| CoreError::contract(format!("malformed analysis result: {}", e)))?;
        result.log_contract_drift();
        Ok(result)
    }

    /// Whether `score` lies within `[MIN_SCORE, MAX_SCORE]`
    pub fn score_in_range(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.score)
    }

    fn log_contract_drift(&self) {
        if !self.score_in_range() {
            warn!(score = self.score, "analysis score outside 0..=100");
        }
        if !self.level.is_recognized() {
            warn!(level = %self.level, "unrecognized risk level");
        }
    }
}
