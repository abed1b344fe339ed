//! Application layer - Session orchestration and view-state management
//!
//! This module contains the translation session, the upload and progress
//! view models, the localization context, and the event emission seam the
//! front-end implements.

pub mod events;
pub mod i18n;
pub mod progress;
pub mod session;
pub mod upload;

// Re-export commonly used items
pub use events::{EventEmitter, NullEmitter};
pub use i18n::{Localizer, UiLanguage};
pub use progress::ProgressTracker;
pub use session::{SessionError, TranslationSession};
pub use upload::{DragState, SelectionSource, UploadController, UploadError};
