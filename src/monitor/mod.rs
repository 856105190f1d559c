//! Monitor layer for detecting devices joining or leaving the network.
//!
//! This module provides types and functions for:
//! - Representing presence change events ([`ChangedDevice`], [`DeviceChange`])
//! - Detecting changes between snapshots ([`diff`])
//! - Polling-based monitoring ([`PollingMonitor`], [`StopHandle`], [`DeviceStream`])

mod change;
mod poller;

pub use change::{ChangedDevice, DeviceChange, diff};
pub use poller::{DeviceStream, PollingMonitor, StopHandle};
