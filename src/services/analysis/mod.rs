//! Analysis Request Lifecycle
//!
//! Input gate, request state and the orchestrator that sequences them.

pub mod input_gate;
pub mod orchestrator;
pub mod state;

pub use input_gate::{InputGate, Rejection, BUSY_LABEL, SUBMIT_LABEL};
pub use orchestrator::{
    user_facing_message, AnalysisOrchestrator, ForeignTicket, PendingAnalysis, CANCELLED_MESSAGE,
};
pub use state::{Phase, RequestState};
