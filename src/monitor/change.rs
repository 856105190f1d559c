//! Device change detection types and functions.

use std::collections::HashSet;

use macaddr::MacAddr;

use crate::device::AttachedDevice;

/// The kind of presence change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceChange {
    /// The device appeared on the network.
    Added,
    /// The device is no longer on the network.
    Removed,
}

/// A device that joined or left the network between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedDevice {
    /// The device as reported in the snapshot where the change was seen.
    ///
    /// For additions this is the new snapshot's record; for removals it is
    /// the last record seen before the device disappeared.
    pub device: AttachedDevice,
    /// Whether the device was added or removed.
    pub change: DeviceChange,
}

impl ChangedDevice {
    /// Creates a new change event.
    #[must_use]
    pub const fn new(device: AttachedDevice, change: DeviceChange) -> Self {
        Self { device, change }
    }

    /// Creates an "added" change event.
    #[must_use]
    pub const fn added(device: AttachedDevice) -> Self {
        Self::new(device, DeviceChange::Added)
    }

    /// Creates a "removed" change event.
    #[must_use]
    pub const fn removed(device: AttachedDevice) -> Self {
        Self::new(device, DeviceChange::Removed)
    }

    /// Returns true if this is an "added" change.
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self.change, DeviceChange::Added)
    }

    /// Returns true if this is a "removed" change.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self.change, DeviceChange::Removed)
    }

    /// Returns the hardware address of the changed device.
    #[must_use]
    pub const fn mac(&self) -> MacAddr {
        self.device.mac
    }
}

/// Compares two device snapshots and returns presence changes.
///
/// This is a pure function keyed on hardware address only: a device whose
/// name, IP, signal, or link rate changed between snapshots is not reported.
///
/// # Ordering
///
/// All `Added` changes come first, in the order the devices appear in `new`,
/// followed by all `Removed` changes, in the order they appear in `old`.
///
/// # Algorithm
///
/// 1. Collect the MAC addresses present in `old`
/// 2. Scan `new`: a MAC not in the set is `Added`; otherwise it is taken out
///    of the set as seen
/// 3. Scan `old`: a MAC still in the set was not seen in `new` and is `Removed`
#[must_use]
pub fn diff(old: &[AttachedDevice], new: &[AttachedDevice]) -> Vec<ChangedDevice> {
    let mut unseen: HashSet<MacAddr> = old.iter().map(|d| d.mac).collect();
    let mut changes = Vec::new();

    for device in new {
        if !unseen.remove(&device.mac) {
            changes.push(ChangedDevice::added(device.clone()));
        }
    }

    for device in old {
        if unseen.contains(&device.mac) {
            changes.push(ChangedDevice::removed(device.clone()));
        }
    }

    changes
}

#[cfg(test)]
#[path = "change_tests.rs"]
mod tests;
