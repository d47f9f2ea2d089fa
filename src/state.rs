//! Application State
//!
//! Everything a command needs: the effective settings, the analysis service
//! and the orchestrator that owns the request lifecycle.

use std::sync::Arc;

use recruiter_check_client::{AnalysisService, HttpAnalysisClient};
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::settings::AppConfig;
use crate::services::analysis::AnalysisOrchestrator;
use crate::utils::error::{AppError, AppResult};

/// Application state shared by the command handlers
pub struct AppState {
    /// Effective configuration (file + environment + flags)
    config: AppConfig,
    /// Client for the external analysis service
    service: Arc<dyn AnalysisService>,
    /// The single request orchestrator
    orchestrator: Mutex<AnalysisOrchestrator>,
}

impl AppState {
    /// Build the state with the HTTP analysis client
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::validation)?;
        let client = HttpAnalysisClient::new(&config.client_config())?;
        debug!(endpoint = %client.endpoint(), "analysis client ready");
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// Build the state around any analysis service implementation
    pub fn with_service(config: AppConfig, service: Arc<dyn AnalysisService>) -> Self {
        let orchestrator = AnalysisOrchestrator::new(service.clone(), config.request_timeout());
        Self {
            config,
            service,
            orchestrator: Mutex::new(orchestrator),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<dyn AnalysisService> {
        &self.service
    }

    pub fn orchestrator(&self) -> &Mutex<AnalysisOrchestrator> {
        &self.orchestrator
    }
}
