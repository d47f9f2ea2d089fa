//! Analysis Commands
//!
//! Submit one message through the orchestrator and format the outcome.

use tracing::debug;

use crate::models::response::{AnalysisReport, CommandResponse};
use crate::services::analysis::{Phase, Rejection};
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::view::{render_state, Painter};

/// Analyze one message.
///
/// - rejected input -> `success: false`, no data
/// - service failure -> `success: false`, report in `Error` phase
/// - result -> `success: true`, report in `Success` phase with its view
pub async fn analyze_message(state: &AppState, text: &str) -> CommandResponse<AnalysisReport> {
    let mut orchestrator = match state.orchestrator().try_lock() {
        Ok(guard) => guard,
        Err(_) => {
            debug!("orchestrator busy, refusing submission");
            return CommandResponse::err(Rejection::RequestInFlight.to_string());
        }
    };

    let pending = match orchestrator.accept(text) {
        Ok(pending) => pending,
        Err(rejection) => return CommandResponse::err(rejection.to_string()),
    };
    let submitted = pending.text().to_string();
    let final_state = match orchestrator.resolve(pending).await {
        Ok(state) => state.clone(),
        Err(foreign) => return CommandResponse::err(foreign.to_string()),
    };

    let report = AnalysisReport::new(submitted, final_state);
    let error = report.state.error_message().map(str::to_string);
    match error {
        Some(message) => CommandResponse::failed(report, message),
        None => CommandResponse::ok(report),
    }
}

/// Whether the response is a gate rejection rather than a resolved request
pub fn is_rejected(response: &CommandResponse<AnalysisReport>) -> bool {
    response.data.is_none()
}

/// Format an analysis response for the terminal or as one JSON document.
pub fn format_analysis(
    response: &CommandResponse<AnalysisReport>,
    painter: Painter,
    json: bool,
) -> AppResult<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(response)?));
    }
    Ok(match &response.data {
        Some(report) => render_state(&report.state, &report.text, painter),
        None => format!(
            "Nothing analyzed: {}\n",
            response.error.as_deref().unwrap_or("input rejected")
        ),
    })
}

/// Process exit code for an analysis response
pub fn exit_code(response: &CommandResponse<AnalysisReport>) -> i32 {
    match &response.data {
        None => 2,
        Some(report) if report.phase() == Phase::Success => 0,
        Some(_) => 1,
    }
}
