//! Recruiter Check
//!
//! Paste a recruiter message, send it to an external analysis service and
//! show the returned scam-risk assessment. It includes:
//! - the request orchestrator and input gate
//! - command handlers behind the CLI
//! - terminal rendering of the result card
//! - the settings file and its overrides

pub mod cli;
pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
pub mod view;

pub use commands::{analyze_message, check_health, init_settings, run_interactive, show_settings};
pub use models::response::{AnalysisReport, CommandResponse, HealthResponse};
pub use models::settings::AppConfig;
pub use services::analysis::{AnalysisOrchestrator, Phase, Rejection, RequestState};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
