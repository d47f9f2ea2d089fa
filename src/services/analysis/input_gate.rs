//! Input Gate
//!
//! Decides whether raw user text may start an analysis. It never touches
//! request state; the orchestrator passes in the current phase.

use thiserror::Error;

use super::state::Phase;

/// Label of the submit control when idle
pub const SUBMIT_LABEL: &str = "Analyze Message";

/// Label of the submit control while a request is in flight
pub const BUSY_LABEL: &str = "Analyzing…";

/// Why a submission was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("message is empty")]
    EmptyInput,
    #[error("an analysis is already in progress")]
    RequestInFlight,
}

/// Gate between the text input and the orchestrator
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGate;

impl InputGate {
    pub fn new() -> Self {
        Self
    }

    /// Trim `raw` and accept it unless it is blank or a request is in flight.
    pub fn submit(&self, raw: &str, phase: Phase) -> Result<String, Rejection> {
        if phase.is_busy() {
            return Err(Rejection::RequestInFlight);
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Rejection::EmptyInput);
        }
        Ok(trimmed.to_string())
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self, raw: &str, phase: Phase) -> bool {
        self.submit(raw, phase).is_ok()
    }

    pub fn submit_label(&self, phase: Phase) -> &'static str {
        if phase.is_busy() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
