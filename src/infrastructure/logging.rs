//! Logging system configuration and initialization
//!
//! This module provides the tracing setup used by every binary:
//! - File logging via a non-blocking appender
//! - Configuration file based log level control
//! - Structured JSON logging (optional)
//! - Console output kept separate so it can stay off while the interactive
//!   progress display owns the terminal

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use lazy_static::lazy_static;
use std::sync::Mutex;
use tracing::info;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

// Global guard to keep the log file writer alive
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>> =
        Mutex::new(Vec::new());
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    let config = LoggingConfig::default();
    init_logging_with_config(config)
}

/// Initialize logging with custom configuration.
///
/// `RUST_LOG` overrides the configured filter entirely. Without it, verbose
/// dependency targets (`reqwest`, `hyper`, `h2`) are held at warn so the log
/// stays about the translation job, not about connection pooling.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(&config.level)
            .add_directive("reqwest=warn".parse().expect("static directive"))
            .add_directive("hyper=warn".parse().expect("static directive"))
            .add_directive("h2=warn".parse().expect("static directive"))
    });

    let registry = Registry::default().with(env_filter);

    match (config.file_output, config.console_output) {
        (true, console) => {
            let log_dir = get_log_directory();
            std::fs::create_dir_all(&log_dir)
                .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;

            let file_appender = rolling::never(&log_dir, "po-prevoditelj.log");
            let (file_writer, file_guard) = non_blocking(file_appender);

            // Store the guard globally to prevent it from being dropped
            LOG_GUARDS.lock().expect("log guard mutex").push(file_guard);

            if config.json_format {
                let file_layer = fmt::Layer::new()
                    .json()
                    .with_writer(file_writer)
                    .with_target(true)
                    .with_ansi(false);
                if console {
                    let console_layer = fmt::Layer::new()
                        .with_writer(std::io::stderr)
                        .with_target(false);
                    registry.with(file_layer).with(console_layer).init();
                } else {
                    registry.with(file_layer).init();
                }
            } else {
                let file_layer = fmt::Layer::new()
                    .with_writer(file_writer)
                    .with_target(false)
                    .with_ansi(false);
                if console {
                    let console_layer = fmt::Layer::new()
                        .with_writer(std::io::stderr)
                        .with_target(false);
                    registry.with(file_layer).with(console_layer).init();
                } else {
                    registry.with(file_layer).init();
                }
            }

            info!("Logging initialized, log directory: {:?}", log_dir);
        }
        (false, true) => {
            let console_layer = fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false);
            registry.with(console_layer).init();
        }
        (false, false) => {
            return Err(anyhow!("No logging output configured"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.level.is_empty());
        assert!(config.file_output);
        assert!(!config.console_output);
    }

    #[test]
    fn test_log_directory_is_deterministic() {
        let log_dir = get_log_directory();
        assert!(log_dir.to_string_lossy().ends_with("logs"));
    }
}
