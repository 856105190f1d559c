//! Polling-based device monitor.
//!
//! This module provides:
//! - [`PollingMonitor`]: Configuration and entry point for polling
//! - [`StopHandle`]: Handle for stopping a running monitor
//! - [`DeviceStream`]: Stream of change events, as an alternative to a callback

mod monitor;
mod stream;
mod tracker;

pub use monitor::{PollingMonitor, StopHandle};
pub use stream::DeviceStream;

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
mod tracker_test;
