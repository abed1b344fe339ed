//! Upload-and-translate command with a live progress display
//!
//! Folds emitted progress snapshots into an interactive progress bar and
//! renders the result set once the terminal event arrives.

use std::path::Path;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;

use crate::application::events::EventEmitter;
use crate::application::i18n::Localizer;
use crate::application::session::{SessionError, TranslationSession};
use crate::application::upload::{SelectionSource, UploadError};
use crate::domain::events::ProgressSnapshot;
use crate::domain::models::{EntryStatus, TranslationResult};

/// Emitter rendering snapshots onto an indicatif progress bar.
///
/// `ProgressBar` is internally reference-counted and updatable through a
/// shared reference, which is exactly what the emitter trait needs.
struct ConsoleEmitter {
    bar: ProgressBar,
    localizer: Localizer,
}

#[async_trait]
impl EventEmitter for ConsoleEmitter {
    async fn emit_progress(&self, snapshot: &ProgressSnapshot) {
        self.bar.set_position(u64::from(snapshot.percent));
        self.bar.set_message(format!(
            "{} {} | {} {} | {} {} | {}: {} | {}",
            snapshot.translated_count,
            self.localizer.text("progress.translated"),
            snapshot.skipped_count,
            self.localizer.text("progress.skipped"),
            snapshot.error_count,
            self.localizer.text("progress.errors"),
            self.localizer.text("progress.eta"),
            format_eta(snapshot.eta_seconds, &self.localizer),
            truncate_text(&snapshot.current_item_text, 40),
        ));
    }

    async fn emit_complete(&self, _result: &TranslationResult) {
        self.bar.finish_and_clear();
    }

    async fn emit_error(&self, _error: &SessionError) {
        self.bar.abandon();
    }
}

/// Run one translation job end to end.
pub async fn run(
    session: &mut TranslationSession,
    localizer: &Localizer,
    file: &Path,
    source_lang: &str,
    target_lang: &str,
    output_dir: &Path,
) -> Result<()> {
    // Explicit path arguments take the picker pathway: rejection clears any
    // previous selection.
    if let Err(e) = session.upload_mut().offer(file, SelectionSource::Picker) {
        return Err(anyhow!("{}", upload_error_text(&e, localizer)));
    }
    session.set_language_pair(source_lang, target_lang);

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{prefix} [{bar:40.cyan/blue}] {pos:>3}% {msg}")?
            .progress_chars("##-"),
    );
    bar.set_prefix(localizer.text("translate.running").to_string());

    let emitter = ConsoleEmitter {
        bar,
        localizer: *localizer,
    };

    // No client-initiated abort once submitted: the token is never fired.
    let outcome = session
        .run_translation(&emitter, CancellationToken::new())
        .await;

    if let Err(e) = outcome {
        let message = e
            .server_detail()
            .map(str::to_string)
            .unwrap_or_else(|| localizer.text("translate.failed").to_string());
        return Err(anyhow!("{message}"));
    }

    // A healthy stream carries exactly one terminal event; ending without
    // one means the job never finished.
    if session.result().is_none() {
        return Err(anyhow!("{}", localizer.text("translate.failed")));
    }

    let saved_path = session.save_result_artifact(output_dir).await;
    if let Some(result) = session.result() {
        print_result(result, localizer);
    }

    match saved_path {
        Ok(path) => {
            println!();
            println!(
                "{} {}",
                localizer.text("results.saved"),
                style(path.display()).green()
            );
            Ok(())
        }
        Err(e) => Err(anyhow!("{}: {e}", localizer.text("download.failed"))),
    }
}

/// Render the terminal result set.
fn print_result(result: &TranslationResult, localizer: &Localizer) {
    println!();
    println!("{}", style(localizer.text("results.title")).bold());
    println!(
        "  {}: {}  |  {}: {}  |  {}: {}  |  {}: {}",
        localizer.text("progress.total"),
        result.total_entries,
        localizer.text("progress.translated"),
        style(result.translated_entries).green(),
        localizer.text("progress.skipped"),
        style(result.skipped_entries).yellow(),
        localizer.text("progress.errors"),
        style(result.error_entries).red(),
    );

    for entry in &result.entries {
        let marker = match entry.status {
            EntryStatus::Success => style("✓").green(),
            EntryStatus::Skipped => style("→").yellow(),
            EntryStatus::Error => style("✗").red(),
        };
        println!(
            "  {} {}  {}",
            marker,
            truncate_text(&entry.msgid, 48),
            truncate_text(&entry.translated, 48),
        );
    }
}

/// Format a backend-reported ETA the way the original interface did:
/// a placeholder when absent, seconds under a minute, minutes + seconds
/// otherwise. No client-side estimation happens here.
fn format_eta(eta_seconds: Option<u64>, localizer: &Localizer) -> String {
    match eta_seconds {
        None => "--:--".to_string(),
        Some(seconds) if seconds < 60 => {
            format!("{seconds} {}", localizer.text("time.sec"))
        }
        Some(seconds) => {
            let minutes = seconds / 60;
            let rest = seconds % 60;
            format!(
                "{minutes} {} {rest} {}",
                localizer.text("time.min"),
                localizer.text("time.sec")
            )
        }
    }
}

fn upload_error_text(error: &UploadError, localizer: &Localizer) -> String {
    match error {
        UploadError::WrongExtension { .. } => localizer.text("upload.invalid_type").to_string(),
        UploadError::NoFileSelected => localizer.text("upload.no_file").to_string(),
    }
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::i18n::UiLanguage;

    #[test]
    fn eta_placeholder_when_backend_reports_none() {
        let localizer = Localizer::new(UiLanguage::Croatian);
        assert_eq!(format_eta(None, &localizer), "--:--");
    }

    #[test]
    fn eta_under_a_minute_shows_seconds_only() {
        let localizer = Localizer::new(UiLanguage::Croatian);
        assert_eq!(format_eta(Some(45), &localizer), "45 sek");
    }

    #[test]
    fn eta_over_a_minute_shows_minutes_and_seconds() {
        let localizer = Localizer::new(UiLanguage::English);
        assert_eq!(format_eta(Some(125), &localizer), "2 min 5 sec");
    }

    #[test]
    fn truncation_keeps_short_text_intact() {
        assert_eq!(truncate_text("Add to cart", 40), "Add to cart");
    }

    #[test]
    fn truncation_marks_long_text_with_ellipsis() {
        let long = "x".repeat(60);
        let truncated = truncate_text(&long, 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn upload_errors_localize_per_language() {
        let hr = Localizer::new(UiLanguage::Croatian);
        let en = Localizer::new(UiLanguage::English);
        let error = UploadError::WrongExtension {
            name: "x.txt".into(),
        };
        assert_eq!(
            upload_error_text(&error, &hr),
            "Molimo uploadajte samo .po datoteke"
        );
        assert_eq!(upload_error_text(&error, &en), "Please upload .po files only");
    }
}
