//! Core entities exchanged with the translation backend
//!
//! These types mirror the backend's JSON shapes. They are owned by the client
//! session for the lifetime of one run and are never persisted locally.

use serde::{Deserialize, Serialize};

use crate::domain::constants::PO_EXTENSION;

/// Outcome of translating a single PO entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry was translated by the backend
    Success,
    /// Entry already had a translation or was empty
    Skipped,
    /// Translation failed; original text kept
    Error,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Skipped => write!(f, "skipped"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Per-entry result line, in source file order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryOutcome {
    /// Source text of the entry
    #[serde(default)]
    pub msgid: String,
    /// Pre-existing translation, if the file carried one
    #[serde(default)]
    pub msgstr: String,
    /// Translated text (or the original text for skipped/errored entries)
    #[serde(default)]
    pub translated: String,
    /// How the backend handled this entry
    pub status: EntryStatus,
}

/// Full result set delivered by the terminal stream event.
///
/// Built atomically from that event and immutable afterwards; replaced
/// wholesale by the next job or discarded on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Backend-assigned id of the stored translation, when present
    #[serde(default)]
    pub id: Option<String>,
    /// Name of the uploaded file
    pub filename: String,
    /// Target language code
    pub target_lang: String,
    #[serde(default)]
    pub total_entries: u32,
    #[serde(default)]
    pub translated_entries: u32,
    #[serde(default)]
    pub skipped_entries: u32,
    #[serde(default)]
    pub error_entries: u32,
    /// Body of the translated PO file
    #[serde(default)]
    pub po_content: String,
    /// Per-entry outcomes, in source file order
    #[serde(default)]
    pub entries: Vec<EntryOutcome>,
}

impl TranslationResult {
    /// File name for the downloadable artifact:
    /// `{original_stem}_{target_lang}.po`
    pub fn download_file_name(&self) -> String {
        artifact_file_name(&self.filename, &self.target_lang)
    }
}

/// One row of the translation history list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub filename: String,
    pub source_lang: String,
    pub target_lang: String,
    #[serde(default)]
    pub total_entries: u32,
    #[serde(default)]
    pub translated_entries: u32,
    /// ISO-8601 creation timestamp as reported by the backend
    #[serde(default)]
    pub created_at: String,
}

impl HistoryRecord {
    /// Artifact name for a history download; same rule as a fresh result
    pub fn download_file_name(&self) -> String {
        artifact_file_name(&self.filename, &self.target_lang)
    }
}

/// Apply the artifact naming rule shared by fresh results and history rows.
pub fn artifact_file_name(original: &str, target_lang: &str) -> String {
    let stem = original.strip_suffix(PO_EXTENSION).unwrap_or(original);
    format!("{stem}_{target_lang}{PO_EXTENSION}")
}
