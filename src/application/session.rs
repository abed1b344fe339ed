//! Translation session orchestration
//!
//! Drives one translation job at a time: submits the selected file, folds
//! the backend's event stream into the progress view model, swaps the view
//! to the result on the terminal event, and refreshes the history list.
//! Language-list and history fetches are independent of the job stream;
//! their failures are logged and leave prior state in place.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::events::EventEmitter;
use crate::application::progress::ProgressTracker;
use crate::application::upload::{UploadController, UploadError};
use crate::domain::events::TranslationEvent;
use crate::domain::models::{HistoryRecord, TranslationResult};
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::api_error::ApiError;
use crate::infrastructure::event_stream::EventStreamParser;

/// Error surfaced by session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("A translation job is already running")]
    AlreadyRunning,

    #[error("Translation was cancelled")]
    Cancelled,

    #[error("No completed translation to save")]
    NoResult,

    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    FileWrite { path: String, message: String },
}

impl SessionError {
    /// Server-provided message suitable for direct display, when one exists
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Api(api) => api.server_detail(),
            _ => None,
        }
    }

    /// Whether a fresh user action can simply retry
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Upload(_) => true,
            Self::Api(api) => api.is_recoverable(),
            Self::AlreadyRunning | Self::Cancelled | Self::NoResult => true,
            Self::FileRead { .. } | Self::FileWrite { .. } => true,
        }
    }
}

/// Client-side state for one browser-session-equivalent run of the app.
///
/// Exactly one translation job may be in flight at a time; the submit path
/// is guarded and not re-entrant while `loading` is true.
pub struct TranslationSession {
    api: Arc<ApiClient>,
    upload: UploadController,
    progress: ProgressTracker,
    result: Option<TranslationResult>,
    history: Vec<HistoryRecord>,
    languages: HashMap<String, String>,
    source_lang: String,
    target_lang: String,
    loading: bool,
    stream_idle_timeout: Duration,
}

impl TranslationSession {
    pub fn new(api: Arc<ApiClient>, stream_idle_timeout: Duration) -> Self {
        Self {
            api,
            upload: UploadController::new(),
            progress: ProgressTracker::new(),
            result: None,
            history: Vec::new(),
            languages: HashMap::new(),
            source_lang: crate::domain::constants::AUTO_SOURCE.to_string(),
            target_lang: crate::domain::constants::DEFAULT_TARGET.to_string(),
            loading: false,
            stream_idle_timeout,
        }
    }

    pub fn upload(&self) -> &UploadController {
        &self.upload
    }

    pub fn upload_mut(&mut self) -> &mut UploadController {
        &mut self.upload
    }

    pub fn progress(&self) -> &crate::domain::events::ProgressSnapshot {
        self.progress.snapshot()
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn languages(&self) -> &HashMap<String, String> {
        &self.languages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Choose the language pair for the next job
    pub fn set_language_pair(&mut self, source: &str, target: &str) {
        self.source_lang = source.to_string();
        self.target_lang = target.to_string();
    }

    /// Fetch the supported language map.
    ///
    /// Independent of the job stream; a failure is logged and the previous
    /// map stays in place. No retry.
    pub async fn refresh_languages(&mut self) {
        match self.api.fetch_languages().await {
            Ok(languages) => self.languages = languages,
            Err(e) => warn!("Failed to fetch languages: {}", e),
        }
    }

    /// Refetch the history list wholesale.
    ///
    /// Same fire-and-forget semantics as the language fetch.
    pub async fn refresh_history(&mut self) {
        match self.api.fetch_history().await {
            Ok(history) => self.history = history,
            Err(e) => warn!("Failed to fetch history: {}", e),
        }
    }

    /// Submit the selected file and consume the progress stream until the
    /// job completes or fails.
    ///
    /// The cancellation token is an extension point; the interactive client
    /// passes a token that never fires, preserving the no-client-abort
    /// behavior of the job once submitted.
    pub async fn run_translation(
        &mut self,
        emitter: &dyn EventEmitter,
        cancel: CancellationToken,
    ) -> Result<(), SessionError> {
        if self.loading {
            return Err(SessionError::AlreadyRunning);
        }

        let path = self.upload.require_selected()?.to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let job_id = Uuid::new_v4();

        self.loading = true;
        self.result = None;
        self.progress.start();
        emitter.emit_progress(self.progress.snapshot()).await;
        info!(
            "Starting translation job {} for {} ({} -> {})",
            job_id, file_name, self.source_lang, self.target_lang
        );

        let outcome = self.drive_stream(&path, &file_name, emitter, cancel).await;
        self.loading = false;

        match outcome {
            Ok(()) => {
                info!("Translation job {} finished", job_id);
                Ok(())
            }
            Err(e) => {
                // Progress state stays as last observed; it is not rolled
                // back on failure.
                warn!("Translation job {} failed: {}", job_id, e);
                emitter.emit_error(&e).await;
                Err(e)
            }
        }
    }

    async fn drive_stream(
        &mut self,
        path: &Path,
        file_name: &str,
        emitter: &dyn EventEmitter,
        cancel: CancellationToken,
    ) -> Result<(), SessionError> {
        let file_bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SessionError::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let response = self
            .api
            .start_translation(file_name, file_bytes, &self.source_lang, &self.target_lang)
            .await?;

        let stream = response.bytes_stream();
        self.consume_event_stream(stream, emitter, cancel).await
    }

    /// Fold a chunked byte stream into view state.
    ///
    /// Generic over the stream so tests can drive it with in-memory chunk
    /// sequences; the production caller passes the response body stream.
    pub async fn consume_event_stream<S, B, E>(
        &mut self,
        mut stream: S,
        emitter: &dyn EventEmitter,
        cancel: CancellationToken,
    ) -> Result<(), SessionError>
    where
        S: Stream<Item = Result<B, E>> + Unpin,
        B: AsRef<[u8]>,
        E: std::fmt::Display,
    {
        let mut parser = EventStreamParser::new();

        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Translation stream cancelled by caller");
                    return Err(SessionError::Cancelled);
                }
                next = tokio::time::timeout(self.stream_idle_timeout, stream.next()) => next,
            };

            let chunk = match next {
                Err(_elapsed) => {
                    return Err(ApiError::StreamStalled {
                        idle_seconds: self.stream_idle_timeout.as_secs(),
                    }
                    .into());
                }
                Ok(None) => break,
                Ok(Some(Ok(chunk))) => chunk,
                Ok(Some(Err(e))) => {
                    return Err(ApiError::StreamInterrupted {
                        message: e.to_string(),
                    }
                    .into());
                }
            };

            for event in parser.push_chunk(chunk.as_ref()) {
                self.apply_event(event, emitter).await;
            }
        }

        Ok(())
    }

    /// Fold one decoded event into the view state.
    async fn apply_event(&mut self, event: TranslationEvent, emitter: &dyn EventEmitter) {
        match event {
            TranslationEvent::Progress(update) => {
                self.progress.apply_update(&update);
                emitter.emit_progress(self.progress.snapshot()).await;
            }
            TranslationEvent::Complete(result) => {
                self.progress.complete();
                emitter.emit_progress(self.progress.snapshot()).await;
                emitter.emit_complete(&result).await;
                self.result = Some(result);
                // The terminal event also invalidates the history view.
                self.refresh_history().await;
            }
        }
    }

    /// Fetch the stored detail record of a translation by id
    pub async fn fetch_translation_detail(
        &self,
        id: &str,
    ) -> Result<TranslationResult, SessionError> {
        Ok(self.api.fetch_translation(id).await?)
    }

    /// Write the completed job's artifact into `output_dir` and return the
    /// written path.
    pub async fn save_result_artifact(&self, output_dir: &Path) -> Result<PathBuf, SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        let target = output_dir.join(result.download_file_name());

        tokio::fs::write(&target, result.po_content.as_bytes())
            .await
            .map_err(|e| SessionError::FileWrite {
                path: target.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(target)
    }

    /// Fetch a history record's artifact from the backend and write it into
    /// `output_dir` under the shared naming rule.
    pub async fn download_history_artifact(
        &self,
        record: &HistoryRecord,
        output_dir: &Path,
    ) -> Result<PathBuf, SessionError> {
        let bytes = self.api.download_translation(&record.id).await?;
        let target = output_dir.join(record.download_file_name());

        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|e| SessionError::FileWrite {
                path: target.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(target)
    }

    /// Return to the pre-submit state: no file, no result, idle progress.
    pub fn reset(&mut self) {
        self.upload.clear();
        self.result = None;
        self.progress.reset();
    }
}
