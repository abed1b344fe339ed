//! Domain module - Core entities and event types
//!
//! This module contains the entities exchanged with the translation backend
//! and the event/snapshot types the rest of the client folds them into.

pub mod constants;
pub mod events;
pub mod models;

// Re-export commonly used items
pub use events::{ProgressSnapshot, ProgressUpdate, TranslationEvent, TranslationStatus};
pub use models::{EntryOutcome, EntryStatus, HistoryRecord, TranslationResult, artifact_file_name};
