//! Upload state management
//!
//! Holds at most one candidate file and the validation/drag state around it.
//! The two selection pathways deliberately differ on rejection: the picker
//! clears any previous selection, the drop pathway keeps it. This asymmetry
//! is observable behavior and is encoded per pathway rather than unified.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::constants::PO_EXTENSION;

/// Why a candidate file was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Only .po files are supported: {name}")]
    WrongExtension { name: String },

    #[error("No file selected")]
    NoFileSelected,
}

/// Which pathway delivered the candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// File picker dialog / explicit path argument
    Picker,
    /// Drag-and-drop
    Drop,
}

impl SelectionSource {
    /// Whether a rejected candidate from this pathway also clears the
    /// previous selection.
    fn clears_on_reject(self) -> bool {
        matches!(self, Self::Picker)
    }
}

/// Drag indicator state, derived purely from the enter/over/leave sequence.
///
/// It never affects whether a drop is accepted; `Departed` only records that
/// a drag hovered and left without dropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag is hovering over the target
    Active,
    /// A drag entered and left without dropping
    Departed,
}

/// Controller for the single candidate file
#[derive(Debug, Default)]
pub struct UploadController {
    selected: Option<PathBuf>,
    error: Option<UploadError>,
    drag: DragState,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate file from one of the two pathways.
    ///
    /// Acceptance requires the name to end with `.po` (case-sensitive
    /// suffix). On rejection the error is recorded for inline display and
    /// the pathway decides whether the previous selection survives.
    pub fn offer(
        &mut self,
        path: impl Into<PathBuf>,
        source: SelectionSource,
    ) -> Result<(), UploadError> {
        let path = path.into();
        if source == SelectionSource::Drop {
            self.drag = DragState::Idle;
        }

        if has_po_extension(&path) {
            self.selected = Some(path);
            self.error = None;
            Ok(())
        } else {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            let error = UploadError::WrongExtension { name };
            if source.clears_on_reject() {
                self.selected = None;
            }
            self.error = Some(error.clone());
            Err(error)
        }
    }

    /// Currently selected file, if any
    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Selected file or the validation error a submit should surface
    pub fn require_selected(&self) -> Result<&Path, UploadError> {
        self.selected.as_deref().ok_or(UploadError::NoFileSelected)
    }

    /// Last validation error, for inline display
    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn on_drag_enter(&mut self) {
        self.drag = DragState::Active;
    }

    pub fn on_drag_over(&mut self) {
        self.drag = DragState::Active;
    }

    pub fn on_drag_leave(&mut self) {
        self.drag = DragState::Departed;
    }

    /// Clear selection, error and drag state (job reset)
    pub fn clear(&mut self) {
        self.selected = None;
        self.error = None;
        self.drag = DragState::Idle;
    }
}

/// Case-sensitive suffix match on the file name.
fn has_po_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(PO_EXTENSION))
}
