//! Event emission seam between the session and the front-end
//!
//! The session pushes job lifecycle events through this trait so the
//! stream-consuming loop stays independent of how progress is rendered.
//! The terminal front-end implements it over an interactive progress
//! display; tests implement it with a recording sink.

use async_trait::async_trait;

use crate::application::session::SessionError;
use crate::domain::events::ProgressSnapshot;
use crate::domain::models::TranslationResult;

/// Sink for real-time job updates
#[async_trait]
pub trait EventEmitter: Send + Sync {
    /// A new progress snapshot replaced the previous one
    async fn emit_progress(&self, snapshot: &ProgressSnapshot);

    /// The terminal event arrived with the full result set
    async fn emit_complete(&self, result: &TranslationResult);

    /// The job ended without a result
    async fn emit_error(&self, error: &SessionError);
}

/// Emitter that drops every event (non-interactive use, tests)
#[derive(Debug, Default)]
pub struct NullEmitter;

#[async_trait]
impl EventEmitter for NullEmitter {
    async fn emit_progress(&self, _snapshot: &ProgressSnapshot) {}

    async fn emit_complete(&self, _result: &TranslationResult) {}

    async fn emit_error(&self, _error: &SessionError) {}
}
