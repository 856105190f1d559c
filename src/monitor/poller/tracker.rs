//! Per-tick fetch and diff against the baseline snapshot.

use super::super::change::{ChangedDevice, diff};
use crate::device::AttachedDevice;
use crate::router::{DeviceSource, RouterError};

/// Holds the baseline snapshot for one polling task.
///
/// The baseline is owned exclusively by the task driving the tracker and is
/// only observable through the changes [`Tracker::tick`] returns.
pub(super) struct Tracker<S> {
    source: S,
    /// Last successfully fetched snapshot; empty until the first success
    baseline: Vec<AttachedDevice>,
}

impl<S: DeviceSource> Tracker<S> {
    pub(super) const fn new(source: S) -> Self {
        Self {
            source,
            baseline: Vec::new(),
        }
    }

    /// Runs one login, fetch, and diff cycle.
    ///
    /// On success the fetched snapshot becomes the new baseline. On failure
    /// the baseline is left untouched, so the next successful tick is
    /// compared against the last good snapshot.
    pub(super) async fn tick(&mut self) -> Result<Vec<ChangedDevice>, RouterError> {
        self.source.login().await?;
        let current = self.source.fetch_devices().await?;

        let changes = diff(&self.baseline, &current);
        tracing::debug!(
            devices = current.len(),
            changes = changes.len(),
            "Poll completed"
        );

        self.baseline = current;
        Ok(changes)
    }
}
