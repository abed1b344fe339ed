//! Event types for real-time progress reporting during a translation job
//!
//! This module defines the payloads carried by the backend's event stream and
//! the snapshot type the UI folds them into. Wire field names follow the
//! backend contract exactly; the snapshot uses client-side naming.

use serde::{Deserialize, Serialize};

use crate::domain::models::TranslationResult;

/// Overall status of the translation job as displayed to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// No job is running
    Idle,
    /// Job submitted, waiting for the first progress frame
    Starting,
    /// Backend is translating entries
    Translating,
    /// Terminal event received
    Complete,
}

impl TranslationStatus {
    /// Map a wire status string onto the enum.
    ///
    /// The backend omits the field on some frames; an empty or unknown value
    /// means the job is mid-flight.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "idle" => Self::Idle,
            "starting" => Self::Starting,
            "complete" => Self::Complete,
            _ => Self::Translating,
        }
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Starting => write!(f, "starting"),
            Self::Translating => write!(f, "translating"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Payload of a `progress` frame, as sent by the backend.
///
/// Every numeric field is optional on the wire and defaults to zero; the ETA
/// is passed through as-is because absence ("no estimate yet") is meaningful
/// to the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressUpdate {
    #[serde(default)]
    pub percent: u32,
    #[serde(default)]
    pub translated: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub to_translate: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: u32,
    #[serde(default)]
    pub eta_seconds: Option<u64>,
    #[serde(default)]
    pub current_text: String,
    #[serde(default)]
    pub status: String,
}

/// Denormalized view of in-flight job progress.
///
/// Replaced wholesale by each incoming progress event; fields are
/// independently overwritten and no cross-field consistency is assumed
/// (counts need not sum to the total on intermediate frames).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    /// Progress percentage (0 to 100)
    pub percent: u32,
    /// Entries translated so far
    pub translated_count: u32,
    /// Total entries in the uploaded file
    pub total_count: u32,
    /// Entries still waiting for translation
    pub pending_count: u32,
    /// Entries skipped (already translated or empty)
    pub skipped_count: u32,
    /// Entries that failed to translate
    pub error_count: u32,
    /// Backend-reported ETA in seconds, if any
    pub eta_seconds: Option<u64>,
    /// Source text currently being translated
    pub current_item_text: String,
    /// Overall job status
    pub status: TranslationStatus,
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self {
            percent: 0,
            translated_count: 0,
            total_count: 0,
            pending_count: 0,
            skipped_count: 0,
            error_count: 0,
            eta_seconds: None,
            current_item_text: String::new(),
            status: TranslationStatus::Idle,
        }
    }
}

impl ProgressSnapshot {
    /// Snapshot shown between job submission and the first progress frame
    pub fn starting() -> Self {
        Self {
            status: TranslationStatus::Starting,
            ..Self::default()
        }
    }

    /// Freeze the snapshot on receipt of the terminal event.
    ///
    /// The terminal event always wins over the last progress frame, so the
    /// displayed bar ends at 100% even when the final progress frame said
    /// less.
    pub fn freeze_complete(&mut self) {
        self.percent = 100;
        self.status = TranslationStatus::Complete;
    }
}

impl From<&ProgressUpdate> for ProgressSnapshot {
    fn from(update: &ProgressUpdate) -> Self {
        Self {
            percent: update.percent.min(100),
            translated_count: update.translated,
            total_count: update.total,
            pending_count: update.to_translate,
            skipped_count: update.skipped,
            error_count: update.errors,
            eta_seconds: update.eta_seconds,
            current_item_text: update.current_text.clone(),
            status: if update.status.is_empty() {
                TranslationStatus::Translating
            } else {
                TranslationStatus::from_wire(&update.status)
            },
        }
    }
}

/// Typed events decoded from the backend's event stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TranslationEvent {
    /// Incremental progress update
    Progress(ProgressUpdate),
    /// Terminal event carrying the full result set
    Complete(TranslationResult),
}

impl TranslationEvent {
    /// Wire name of the event, as it appears after the `event:` marker
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Progress(_) => "progress",
            Self::Complete(_) => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_update_defaults_absent_fields_to_zero() {
        let update: ProgressUpdate = serde_json::from_str(r#"{"percent": 40}"#).unwrap();
        assert_eq!(update.percent, 40);
        assert_eq!(update.translated, 0);
        assert_eq!(update.total, 0);
        assert_eq!(update.eta_seconds, None);
        assert!(update.current_text.is_empty());
    }

    #[test]
    fn snapshot_from_update_maps_wire_fields() {
        let update: ProgressUpdate = serde_json::from_str(
            r#"{"percent":50,"translated":5,"total":10,"to_translate":4,"skipped":1,"errors":0,"eta_seconds":12,"current_text":"Add to cart","status":"translating"}"#,
        )
        .unwrap();

        let snapshot = ProgressSnapshot::from(&update);
        assert_eq!(snapshot.percent, 50);
        assert_eq!(snapshot.translated_count, 5);
        assert_eq!(snapshot.total_count, 10);
        assert_eq!(snapshot.pending_count, 4);
        assert_eq!(snapshot.skipped_count, 1);
        assert_eq!(snapshot.eta_seconds, Some(12));
        assert_eq!(snapshot.current_item_text, "Add to cart");
        assert_eq!(snapshot.status, TranslationStatus::Translating);
    }

    #[test]
    fn missing_status_defaults_to_translating() {
        let update: ProgressUpdate = serde_json::from_str(r#"{"percent":10}"#).unwrap();
        let snapshot = ProgressSnapshot::from(&update);
        assert_eq!(snapshot.status, TranslationStatus::Translating);
    }

    #[test]
    fn freeze_complete_forces_terminal_values() {
        let mut snapshot = ProgressSnapshot {
            percent: 50,
            status: TranslationStatus::Translating,
            ..ProgressSnapshot::default()
        };
        snapshot.freeze_complete();
        assert_eq!(snapshot.percent, 100);
        assert_eq!(snapshot.status, TranslationStatus::Complete);
    }

    #[test]
    fn out_of_range_percent_is_clamped() {
        let update = ProgressUpdate {
            percent: 250,
            ..ProgressUpdate::default()
        };
        assert_eq!(ProgressSnapshot::from(&update).percent, 100);
    }
}
