//! Request State
//!
//! The orchestrator's single lifecycle value. One tagged enum replaces the
//! separate loading / error / result flags, so a result and an error message
//! can never coexist.

use recruiter_check_core::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of the analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing submitted yet
    Idle,
    /// A request is in flight
    Loading,
    /// The last request produced a result
    Success,
    /// The last request failed
    Error,
}

impl Phase {
    /// Whether new submissions must be refused
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Loading)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Loading => write!(f, "loading"),
            Phase::Success => write!(f, "success"),
            Phase::Error => write!(f, "error"),
        }
    }
}

/// State owned by the request orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        text: String,
    },
    Success {
        result: AnalysisResult,
    },
    Error {
        message: String,
    },
}

impl RequestState {
    pub fn phase(&self) -> Phase {
        match self {
            RequestState::Idle => Phase::Idle,
            RequestState::Loading { .. } => Phase::Loading,
            RequestState::Success { .. } => Phase::Success,
            RequestState::Error { .. } => Phase::Error,
        }
    }

    /// The stored result, only in `Success`
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            RequestState::Success { result } => Some(result),
            _ => None,
        }
    }

    /// The user-facing error, only in `Error`
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase().is_busy()
    }
}
