//! History listing command

use anyhow::Result;
use chrono::{DateTime, Utc};
use console::style;

use crate::application::i18n::Localizer;
use crate::application::session::TranslationSession;

/// Fetch and print the history list, newest first as the backend returns it.
pub async fn run(session: &mut TranslationSession, localizer: &Localizer) -> Result<()> {
    session.refresh_history().await;

    println!(
        "{} ({})",
        style(localizer.text("history.title")).bold(),
        session.history().len()
    );

    if session.history().is_empty() {
        println!("  {}", localizer.text("history.empty"));
        return Ok(());
    }

    for record in session.history() {
        println!(
            "  {}  {}  {} → {}  {}/{} {}  {}",
            style(&record.id).dim(),
            record.filename,
            record.source_lang,
            record.target_lang,
            record.translated_entries,
            record.total_entries,
            localizer.text("history.translated_of"),
            format_timestamp(&record.created_at),
        );
    }

    Ok(())
}

/// Render the backend's ISO-8601 timestamp compactly; an unparseable value
/// is shown as-is rather than hidden.
fn format_timestamp(raw: &str) -> String {
    match raw.parse::<DateTime<Utc>>() {
        Ok(timestamp) => timestamp.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamps_are_compacted() {
        assert_eq!(
            format_timestamp("2025-06-01T14:30:05.123456+00:00"),
            "2025-06-01 14:30"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
