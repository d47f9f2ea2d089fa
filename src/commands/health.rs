//! Health Check Commands
//!
//! Check whether the analysis service answers on its root endpoint.

use recruiter_check_client::ClientError;

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Get the health status of the analysis service
pub async fn check_health(state: &AppState) -> CommandResponse<HealthResponse> {
    let mut health = HealthResponse::new(state.config().api_url.clone());

    match state.service().health_check().await {
        Ok(()) => {
            health.reachable = true;
            health.status = "healthy".to_string();
            CommandResponse::ok(health)
        }
        Err(err) => {
            health.reachable = !matches!(err, ClientError::NetworkError { .. });
            health.status = if health.reachable {
                "degraded".to_string()
            } else {
                "unreachable".to_string()
            };
            CommandResponse::failed(health, err.to_string())
        }
    }
}
