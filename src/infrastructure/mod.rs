//! Infrastructure layer for backend communication, configuration and logging
//!
//! This module provides the HTTP client, the event-stream parser, and the
//! configuration/logging plumbing shared by every binary.

pub mod api_client;
pub mod api_error;
pub mod config;
pub mod event_stream;
pub mod logging;

// Re-export commonly used items
pub use api_client::{ApiClient, ApiClientConfig};
pub use api_error::{ApiError, ApiResult};
pub use config::{AppConfig, BackendConfig, ConfigManager, LoggingConfig, UiConfig};
pub use event_stream::EventStreamParser;
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
