//! JSON Configuration Management
//!
//! Loads the settings file and layers environment and command-line overrides
//! on top of it. The file is only ever written by an explicit `init`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{config_path, ensure_dir};

/// Environment variable overriding the analysis service base URL
pub const API_URL_ENV: &str = "RECRUITER_CHECK_API_URL";

/// Configuration service for managing app settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: AppConfig,
    from_file: bool,
}

impl ConfigService {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> AppResult<Self> {
        let config_path = match path {
            Some(p) => p,
            None => config_path()?,
        };

        let (config, from_file) = if config_path.exists() {
            (Self::load_from_file(&config_path)?, true)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            (AppConfig::default(), false)
        };

        Ok(Self {
            config_path,
            config,
            from_file,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &Path, config: &AppConfig) -> AppResult<()> {
        config.validate().map_err(AppError::validation)?;
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `RECRUITER_CHECK_API_URL` from the process environment
    pub fn apply_env(&mut self) -> AppResult<&AppConfig> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env_from<F>(&mut self, lookup: F) -> AppResult<&AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty());
        if let Some(url) = api_url {
            debug!(env = API_URL_ENV, "API URL taken from environment");
            self.apply_overrides(SettingsUpdate {
                api_url: Some(url),
                ..Default::default()
            })?;
        }
        Ok(&self.config)
    }

    /// Apply in-memory overrides (never written back to disk)
    pub fn apply_overrides(&mut self, update: SettingsUpdate) -> AppResult<&AppConfig> {
        let mut candidate = self.config.clone();
        candidate.apply_update(update);
        candidate.validate().map_err(AppError::validation)?;
        self.config = candidate;
        Ok(&self.config)
    }

    /// Write default settings to the config path.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn init(&self, force: bool) -> AppResult<PathBuf> {
        if self.config_path.exists() && !force {
            return Err(AppError::config(format!(
                "{} already exists (use --force to overwrite)",
                self.config_path.display()
            )));
        }
        Self::save_to_file(&self.config_path, &AppConfig::default())?;
        Ok(self.config_path.clone())
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a clone of the current configuration
    pub fn get_config_clone(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Whether the settings came from a file rather than defaults
    pub fn is_from_file(&self) -> bool {
        self.from_file
    }
}
