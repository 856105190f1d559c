//! Shared test fixtures for polling monitor tests.

use crate::device::AttachedDevice;
use crate::router::{DeviceSource, RouterError};
use macaddr::MacAddr6;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Builds a device whose MAC ends in `last`.
pub fn device(last: u8) -> AttachedDevice {
    AttachedDevice::new(MacAddr6::new(0x02, 0, 0, 0, 0, last)).with_name(format!("dev-{last}"))
}

/// Device source that replays scripted login and fetch results.
///
/// Once the fetch script runs out, the last successful snapshot is repeated
/// so the router looks stable. Logins succeed once their script runs out.
pub struct ScriptedSource {
    logins: Mutex<VecDeque<Result<(), RouterError>>>,
    fetches: Mutex<VecDeque<Result<Vec<AttachedDevice>, RouterError>>>,
    last: Mutex<Vec<AttachedDevice>>,
    fetch_delay: Option<Duration>,
    login_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(fetches: Vec<Result<Vec<AttachedDevice>, RouterError>>) -> Self {
        Self {
            logins: Mutex::new(VecDeque::new()),
            fetches: Mutex::new(fetches.into()),
            last: Mutex::new(Vec::new()),
            fetch_delay: None,
            login_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn returning_snapshots(snapshots: Vec<Vec<AttachedDevice>>) -> Self {
        Self::new(snapshots.into_iter().map(Ok).collect())
    }

    pub fn with_logins(self, logins: Vec<Result<(), RouterError>>) -> Self {
        *self.logins.lock().unwrap() = logins.into();
        self
    }

    /// Makes every fetch take `delay` of (tokio) time.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl DeviceSource for Arc<ScriptedSource> {
    async fn login(&self) -> Result<(), RouterError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.logins.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn fetch_devices(&self) -> Result<Vec<AttachedDevice>, RouterError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.fetches.lock().unwrap().pop_front();
        match next {
            Some(Ok(devices)) => {
                self.last.lock().unwrap().clone_from(&devices);
                Ok(devices)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last.lock().unwrap().clone()),
        }
    }
}
