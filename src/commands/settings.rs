//! Settings Commands
//!
//! Show the effective settings or write a default settings file.

use std::path::PathBuf;

use serde::Serialize;

use crate::models::response::CommandResponse;
use crate::models::settings::AppConfig;
use crate::storage::ConfigService;

/// Effective settings and where they came from
#[derive(Debug, Clone, Serialize)]
pub struct SettingsReport {
    pub config_path: PathBuf,
    pub from_file: bool,
    pub config: AppConfig,
}

/// Get the effective application settings
pub fn show_settings(service: &ConfigService) -> CommandResponse<SettingsReport> {
    CommandResponse::ok(SettingsReport {
        config_path: service.config_path().to_path_buf(),
        from_file: service.is_from_file(),
        config: service.get_config_clone(),
    })
}

/// Write the default settings file
pub fn init_settings(service: &ConfigService, force: bool) -> CommandResponse<PathBuf> {
    service.init(force).into()
}
