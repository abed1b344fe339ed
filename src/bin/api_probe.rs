//! Backend reachability probe
//!
//! Small diagnostic driver: verifies the configured backend answers on the
//! language and history endpoints and prints a summary. Useful when the
//! main client reports transport errors and the cause is unclear.

use anyhow::Result;
use tracing::info;

use po_prevoditelj::infrastructure::api_client::{ApiClient, ApiClientConfig};
use po_prevoditelj::infrastructure::config::ConfigManager;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    let config = ConfigManager::new()?.load_config().await?;
    let api_config = ApiClientConfig {
        base_url: config.backend.base_url.clone(),
        request_timeout_seconds: config.backend.request_timeout_seconds,
        connect_timeout_seconds: config.backend.connect_timeout_seconds,
        ..ApiClientConfig::default()
    };

    println!("Probing backend at {}", api_config.base_url);
    let client = ApiClient::new(api_config)?;

    // 1. Language list
    info!("1. Checking /api/languages");
    match client.fetch_languages().await {
        Ok(languages) => println!("✅ languages: {} supported", languages.len()),
        Err(e) => println!("⚠️  languages: {e}"),
    }

    // 2. History list
    info!("2. Checking /api/translations");
    match client.fetch_history().await {
        Ok(history) => println!("✅ history: {} records", history.len()),
        Err(e) => println!("⚠️  history: {e}"),
    }

    Ok(())
}
