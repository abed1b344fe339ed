//! PO Prevoditelj - terminal client for the PO translation service
//!
//! This client uploads a gettext PO file to the translation backend, follows
//! the job's server-sent progress events live, and renders the result set
//! and translation history. All parsing, translation and persistence happen
//! in the backend; this crate owns only client-side state and the
//! event-stream consumer.

// Module declarations
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::i18n::Localizer;
use crate::application::session::TranslationSession;
use crate::cli::{Cli, Commands};
use crate::infrastructure::api_client::{ApiClient, ApiClientConfig};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging_with_config;

/// Parse arguments, wire up configuration and dispatch the chosen command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_manager = ConfigManager::new().context("Failed to locate configuration")?;
    let config = config_manager.load_config().await?;
    init_logging_with_config(config.logging.clone())?;

    let localizer = Localizer::from_code(&config.ui.language);

    // The language switch needs no backend; handle it before building the
    // HTTP client so it works offline.
    if let Commands::SetLanguage { code } = &cli.command {
        return commands::set_language::run(&config_manager, code).await;
    }

    let api_config = ApiClientConfig {
        base_url: cli
            .backend
            .clone()
            .unwrap_or_else(|| config.backend.base_url.clone()),
        request_timeout_seconds: config.backend.request_timeout_seconds,
        connect_timeout_seconds: config.backend.connect_timeout_seconds,
        ..ApiClientConfig::default()
    };
    let api = Arc::new(ApiClient::new(api_config)?);
    let mut session = TranslationSession::new(
        api,
        Duration::from_secs(config.backend.stream_idle_timeout_seconds),
    );

    match cli.command {
        Commands::Translate {
            file,
            source_lang,
            target_lang,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.ui.output_dir.clone());
            commands::translate::run(
                &mut session,
                &localizer,
                &file,
                &source_lang,
                &target_lang,
                &output_dir,
            )
            .await
        }
        Commands::History => commands::history::run(&mut session, &localizer).await,
        Commands::Download { id, output_dir } => {
            let output_dir = output_dir.unwrap_or_else(|| config.ui.output_dir.clone());
            commands::download::run(&mut session, &localizer, &id, &output_dir).await
        }
        Commands::Languages => commands::languages::run(&mut session, &localizer).await,
        Commands::SetLanguage { .. } => unreachable!("handled before client construction"),
    }
}
