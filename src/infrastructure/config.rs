//! Configuration infrastructure
//!
//! Contains configuration loading and management for the translation client.
//!
//! Configuration is organized into three sections:
//! 1. Backend connection settings
//! 2. UI settings (display language, artifact output directory)
//! 3. Logging settings

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{info, warn};

/// Default values, kept together so the config file and `Default` impls
/// cannot drift apart.
pub mod defaults {
    pub const BASE_URL: &str = "http://localhost:8000";
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;
    pub const CONNECT_TIMEOUT_SECONDS: u64 = 10;
    pub const STREAM_IDLE_TIMEOUT_SECONDS: u64 = 120;

    pub const UI_LANGUAGE: &str = "hr";
    pub const OUTPUT_DIR: &str = ".";

    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = false;
    pub const LOG_FILE_OUTPUT: bool = true;
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,

    /// Total timeout for the short JSON endpoints, in seconds
    pub request_timeout_seconds: u64,

    /// Connect timeout for every request, in seconds
    pub connect_timeout_seconds: u64,

    /// How long the event stream may stay silent before the job is
    /// considered stalled, in seconds
    pub stream_idle_timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            connect_timeout_seconds: defaults::CONNECT_TIMEOUT_SECONDS,
            stream_idle_timeout_seconds: defaults::STREAM_IDLE_TIMEOUT_SECONDS,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display language for UI text ("hr" or "en"); the single locally
    /// persisted UI preference
    pub language: String,

    /// Directory where downloaded artifacts are written
    pub output_dir: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: defaults::UI_LANGUAGE.to_string(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs in the log file
    pub json_format: bool,

    /// Enable console output (kept off by default so log lines do not tear
    /// the interactive progress display)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
        }
    }
}

/// Configuration manager for loading and saving settings
pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("po-prevoditelj");

        Ok(config_dir)
    }

    /// Create a new configuration manager pointing at the default location
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        let config_path = config_dir.join("config.json");

        Ok(Self { config_path })
    }

    /// Create a manager for an explicit path (used by tests)
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Load configuration from file, creating the default if it doesn't
    /// exist. A file that no longer parses is backed up and replaced rather
    /// than aborting startup.
    pub async fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "Configuration file not found, creating default: {:?}",
                self.config_path
            );
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .context("Failed to read configuration file")?;

        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(parse_error) => {
                warn!(
                    "Configuration file unreadable ({}), resetting to defaults",
                    parse_error
                );

                let backup_path = self.config_path.with_extension("json.corrupted");
                if let Err(e) = fs::copy(&self.config_path, &backup_path).await {
                    warn!("Failed to back up corrupted config: {}", e);
                } else {
                    info!("Backed up corrupted config to: {:?}", backup_path);
                }

                let default_config = AppConfig::default();
                self.save_config(&default_config)
                    .await
                    .context("Failed to save default configuration")?;
                Ok(default_config)
            }
        }
    }

    /// Save configuration to file
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(&self.config_path, content)
            .await
            .context("Failed to write configuration file")?;

        Ok(())
    }

    /// Persist only the UI language preference.
    ///
    /// The language switch is the one write path for UI state; everything
    /// else in the file is left as the user configured it.
    pub async fn save_ui_language(&self, language: &str) -> Result<AppConfig> {
        let mut config = self.load_config().await?;
        config.ui.language = language.to_string();
        self.save_config(&config).await?;
        Ok(config)
    }
}
