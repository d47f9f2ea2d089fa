//! Request Orchestrator
//!
//! Owns the single `RequestState` and sequences it:
//!
//! ```text
//! Idle ──accept──> Loading ──resolve──> Success | Error
//!                     ^                      │
//!                     └──────accept──────────┘
//! ```
//!
//! `accept` is the only way into `Loading` and hands back a single-use
//! `PendingAnalysis`; `resolve` consumes it and calls the analysis service
//! exactly once. Submissions while `Loading` are refused by the input gate.
//! Dropping a `resolve` before it completes moves the state to `Error`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use recruiter_check_client::{AnalysisService, ClientError, ClientResult};
use recruiter_check_core::{AnalysisRequest, AnalysisResult};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::input_gate::{InputGate, Rejection};
use super::state::{Phase, RequestState};

/// Shown when a resolution is abandoned before the service answered
pub const CANCELLED_MESSAGE: &str = "The analysis was cancelled before the service responded.";

static NEXT_ORCHESTRATOR_ID: AtomicU64 = AtomicU64::new(1);

/// An accepted submission waiting to be sent.
///
/// Only the orchestrator that issued it, while still in the `Loading` it
/// entered for it, can resolve it.
#[derive(Debug)]
pub struct PendingAnalysis {
    request: AnalysisRequest,
    orchestrator_id: u64,
    generation: u64,
}

impl PendingAnalysis {
    pub fn text(&self) -> &str {
        self.request.text()
    }
}

/// A ticket handed to an orchestrator that did not issue it
#[derive(Debug, Error)]
#[error("analysis ticket belongs to another request")]
pub struct ForeignTicket(pub PendingAnalysis);

/// Resets `Loading` to `Error` if a resolution is dropped mid-flight
struct InFlight<'a> {
    state: &'a mut RequestState,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("analysis resolution dropped before completion");
            *self.state = RequestState::Error {
                message: CANCELLED_MESSAGE.to_string(),
            };
        }
    }
}

/// Drives one analysis at a time against an `AnalysisService`
pub struct AnalysisOrchestrator {
    id: u64,
    generation: u64,
    service: Arc<dyn AnalysisService>,
    gate: InputGate,
    state: RequestState,
    timeout: Duration,
    invocations: u64,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator in `Idle`.
    ///
    /// `timeout` bounds every service call, whatever the implementation.
    pub fn new(service: Arc<dyn AnalysisService>, timeout: Duration) -> Self {
        Self {
            id: NEXT_ORCHESTRATOR_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            service,
            gate: InputGate::new(),
            state: RequestState::Idle,
            timeout,
            invocations: 0,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn gate(&self) -> &InputGate {
        &self.gate
    }

    /// Number of service calls issued so far
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    pub fn endpoint(&self) -> &str {
        self.service.endpoint()
    }

    /// Run the input gate and, on acceptance, move to `Loading`.
    ///
    /// A rejection leaves the state exactly as it was.
    pub fn accept(&mut self, raw: &str) -> Result<PendingAnalysis, Rejection> {
        let text = self.gate.submit(raw, self.phase()).map_err(|rejection| {
            debug!(phase = %self.phase(), %rejection, "submission rejected");
            rejection
        })?;
        let request = AnalysisRequest::new(&text).map_err(|_| Rejection::EmptyInput)?;

        info!(from = %self.phase(), bytes = text.len(), "analysis accepted");
        self.generation += 1;
        self.state = RequestState::Loading { text };
        Ok(PendingAnalysis {
            request,
            orchestrator_id: self.id,
            generation: self.generation,
        })
    }

    /// Send the pending request and record the outcome.
    ///
    /// A ticket this orchestrator is not waiting on is handed back untouched
    /// and no request is sent.
    pub async fn resolve(
        &mut self,
        pending: PendingAnalysis,
    ) -> Result<&RequestState, ForeignTicket> {
        if !self.is_waiting_on(&pending) {
            warn!(phase = %self.phase(), "refusing to resolve a foreign analysis ticket");
            return Err(ForeignTicket(pending));
        }
        Ok(self.run(pending).await)
    }

    /// `accept` followed by `resolve`
    pub async fn submit(&mut self, raw: &str) -> Result<&RequestState, Rejection> {
        let pending = self.accept(raw)?;
        Ok(self.run(pending).await)
    }

    fn is_waiting_on(&self, pending: &PendingAnalysis) -> bool {
        pending.orchestrator_id == self.id
            && pending.generation == self.generation
            && self.state.is_loading()
    }

    async fn run(&mut self, pending: PendingAnalysis) -> &RequestState {
        self.invocations += 1;
        let guard = InFlight {
            state: &mut self.state,
            armed: true,
        };
        let call = self.service.analyze(&pending.request);
        let outcome = match tokio::time::timeout(self.timeout, call).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ClientError::network(format!(
                "no response within {}s",
                self.timeout.as_secs_f64()
            ))),
        };
        guard.disarm();
        self.finish(outcome);
        &self.state
    }

    fn finish(&mut self, outcome: ClientResult<AnalysisResult>) {
        self.state = match outcome {
            Ok(result) => {
                info!(score = result.score, level = %result.level, "analysis succeeded");
                RequestState::Success { result }
            }
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "analysis failed");
                RequestState::Error {
                    message: user_facing_message(&err, self.service.endpoint()),
                }
            }
        };
    }
}

/// Turn a client failure into the single string shown to the user.
pub fn user_facing_message(err: &ClientError, endpoint: &str) -> String {
    match err {
        ClientError::NetworkError { message } => format!(
            "Could not reach the analysis service at {}: {}. Is the backend running?",
            endpoint, message
        ),
        ClientError::ApiError { status, body } => format!("API error {}: {}", status, body),
        ClientError::ParseError { message } => {
            format!("Unexpected response from the analysis service: {}", message)
        }
        ClientError::InvalidConfig { message } => {
            format!("The analysis client is misconfigured: {}", message)
        }
    }
}
