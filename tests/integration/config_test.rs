//! Settings Integration Tests
//!
//! The settings file, `RECRUITER_CHECK_API_URL` and command-line flags
//! layered in order of precedence.

use std::fs;

use clap::Parser;
use pretty_assertions::assert_eq;

use recruiter_check::cli::Cli;
use recruiter_check::storage::{ConfigService, API_URL_ENV};
use recruiter_check::{AppConfig, AppError, AppState};

#[test]
fn test_precedence_file_env_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"api_url":"http://from-file:8000","request_timeout_secs":12,"color":false}"#,
    )
    .unwrap();

    let mut service = ConfigService::load(Some(path)).unwrap();
    assert_eq!(service.get_config().api_url, "http://from-file:8000");

    service
        .apply_env_from(|key| (key == API_URL_ENV).then(|| "http://from-env:8000".to_string()))
        .unwrap();
    assert_eq!(service.get_config().api_url, "http://from-env:8000");

    let cli = Cli::try_parse_from([
        "recruiter-check",
        "--api-url",
        "http://from-flag:8000/",
        "health",
    ])
    .unwrap();
    service.apply_overrides(cli.settings_update()).unwrap();

    let config = service.get_config_clone();
    assert_eq!(config.api_url, "http://from-flag:8000/");
    assert_eq!(config.request_timeout_secs, 12);
    assert!(!config.color);
}

#[test]
fn test_state_uses_normalized_endpoint() {
    let config = AppConfig {
        api_url: "http://localhost:8000///".to_string(),
        ..Default::default()
    };
    let state = AppState::new(config).unwrap();
    assert_eq!(state.service().endpoint(), "http://localhost:8000/analyze");
}

#[test]
fn test_invalid_settings_are_refused() {
    let config = AppConfig {
        api_url: "ftp://localhost".to_string(),
        ..Default::default()
    };
    assert!(matches!(AppState::new(config), Err(AppError::Validation(_))));

    let temp_dir = tempfile::tempdir().unwrap();
    let mut service = ConfigService::load(Some(temp_dir.path().join("config.json"))).unwrap();
    let cli = Cli::try_parse_from(["recruiter-check", "--timeout", "0", "health"]).unwrap();
    assert!(service.apply_overrides(cli.settings_update()).is_err());
}

#[test]
fn test_init_then_load_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(".recruiter-check").join("config.json");

    let service = ConfigService::load(Some(path.clone())).unwrap();
    assert!(!service.is_from_file());
    service.init(false).unwrap();

    let reloaded = ConfigService::load(Some(path)).unwrap();
    assert!(reloaded.is_from_file());
    assert_eq!(reloaded.get_config_clone(), AppConfig::default());
}
