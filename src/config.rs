//! Configuration management for the API configuration inspector
//!
//! Tool settings are loaded from TOML with multi-source precedence and
//! zero-config defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{env, files};
use crate::errors::{ConfigError, ConfigResult};

/// Unified tool configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// API configuration document settings
    pub api: ApiSettings,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Where to find the API configuration document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    /// Path of the generated configuration document
    pub config_path: PathBuf,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(files::DEFAULT_API_CONFIG),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no CLI verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with multi-source precedence:
    /// 1. Default values
    /// 2. Config file (explicit, or first found in standard locations)
    /// 3. Environment variables
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Resolve the API document path, preferring an explicit CLI argument
    pub fn api_config_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override.unwrap_or_else(|| self.api.config_path.clone())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(env::API_CONFIG_PATH) {
            if !path.is_empty() {
                debug!("{} overrides API config path: {}", env::API_CONFIG_PATH, path);
                self.api.config_path = PathBuf::from(path);
            }
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(files::LOCAL_TOOL_CONFIG)];
        if let Some(user_path) = Self::default_config_path() {
            search_paths.push(user_path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// Default config file path for the current user
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(files::TOOL_CONFIG_DIR).join(files::TOOL_CONFIG_FILE))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config: AppConfig = toml::from_str(&content)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}
