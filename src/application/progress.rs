//! Progress view model
//!
//! A pure reducer over incoming stream events. Each progress event replaces
//! the whole snapshot (last write wins per field); the terminal event
//! freezes it at 100% regardless of what the last progress frame said.
//! No smoothing and no client-side ETA computation happen here: the ETA is
//! whatever the backend reported, or absent.

use crate::domain::events::{ProgressSnapshot, ProgressUpdate};

/// Holds the snapshot currently shown to the user
#[derive(Debug, Default)]
pub struct ProgressTracker {
    snapshot: ProgressSnapshot,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.snapshot
    }

    /// Mark the job as submitted, before the first progress frame arrives
    pub fn start(&mut self) {
        self.snapshot = ProgressSnapshot::starting();
    }

    /// Replace the snapshot with values from a progress event
    pub fn apply_update(&mut self, update: &ProgressUpdate) {
        self.snapshot = ProgressSnapshot::from(update);
    }

    /// Freeze the snapshot on the terminal event
    pub fn complete(&mut self) {
        self.snapshot.freeze_complete();
    }

    /// Discard the snapshot on job reset
    pub fn reset(&mut self) {
        self.snapshot = ProgressSnapshot::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::TranslationStatus;

    #[test]
    fn starts_idle_with_zeroed_counts() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.snapshot().status, TranslationStatus::Idle);
        assert_eq!(tracker.snapshot().percent, 0);
        assert_eq!(tracker.snapshot().total_count, 0);
    }

    #[test]
    fn each_update_replaces_the_whole_snapshot() {
        let mut tracker = ProgressTracker::new();
        tracker.start();

        tracker.apply_update(&ProgressUpdate {
            percent: 40,
            translated: 4,
            total: 10,
            eta_seconds: Some(30),
            current_text: "Add to cart".into(),
            ..ProgressUpdate::default()
        });
        assert_eq!(tracker.snapshot().percent, 40);
        assert_eq!(tracker.snapshot().eta_seconds, Some(30));

        // A later frame without an ETA clears it: last write wins, no merge.
        tracker.apply_update(&ProgressUpdate {
            percent: 50,
            translated: 5,
            total: 10,
            ..ProgressUpdate::default()
        });
        assert_eq!(tracker.snapshot().percent, 50);
        assert_eq!(tracker.snapshot().eta_seconds, None);
        assert!(tracker.snapshot().current_item_text.is_empty());
    }

    #[test]
    fn complete_overrides_last_progress_values() {
        let mut tracker = ProgressTracker::new();
        tracker.start();
        tracker.apply_update(&ProgressUpdate {
            percent: 50,
            translated: 5,
            total: 10,
            ..ProgressUpdate::default()
        });

        tracker.complete();
        assert_eq!(tracker.snapshot().percent, 100);
        assert_eq!(tracker.snapshot().status, TranslationStatus::Complete);
        // Counts from the last progress frame remain visible.
        assert_eq!(tracker.snapshot().translated_count, 5);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut tracker = ProgressTracker::new();
        tracker.start();
        tracker.complete();
        tracker.reset();
        assert_eq!(tracker.snapshot(), &ProgressSnapshot::default());
    }
}
