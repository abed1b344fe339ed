//! History artifact download command

use std::path::Path;

use anyhow::{Result, anyhow};
use console::style;

use crate::application::i18n::Localizer;
use crate::application::session::TranslationSession;

/// Download the artifact of a stored translation into `output_dir`.
///
/// The record is looked up in the freshly fetched history list first; a
/// record that has scrolled out of the list is resolved through the detail
/// endpoint so old ids keep working.
pub async fn run(
    session: &mut TranslationSession,
    localizer: &Localizer,
    id: &str,
    output_dir: &Path,
) -> Result<()> {
    session.refresh_history().await;

    let record = match session.history().iter().find(|r| r.id == id) {
        Some(record) => record.clone(),
        None => {
            let detail = session
                .fetch_translation_detail(id)
                .await
                .map_err(|e| download_error(&e.to_string(), localizer))?;
            crate::domain::models::HistoryRecord {
                id: id.to_string(),
                filename: detail.filename,
                source_lang: String::new(),
                target_lang: detail.target_lang,
                total_entries: detail.total_entries,
                translated_entries: detail.translated_entries,
                created_at: String::new(),
            }
        }
    };

    let path = session
        .download_history_artifact(&record, output_dir)
        .await
        .map_err(|e| download_error(&e.to_string(), localizer))?;

    println!(
        "{} {}",
        localizer.text("results.saved"),
        style(path.display()).green()
    );
    Ok(())
}

fn download_error(detail: &str, localizer: &Localizer) -> anyhow::Error {
    anyhow!("{}: {detail}", localizer.text("download.failed"))
}
