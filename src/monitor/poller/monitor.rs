//! Polling monitor configuration and background task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, mpsc};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use super::stream::DeviceStream;
use super::tracker::Tracker;
use crate::monitor::ChangedDevice;
use crate::router::{DeviceSource, RouterError};

/// Polling-based attached-device monitor.
///
/// Periodically logs in, fetches the router's device list, and reports each
/// device that joined or left since the last successful poll.
///
/// Every tick runs on a single background task: login, fetch, and all
/// handler calls for one tick finish before the next tick can begin, so a
/// slow router or slow handler delays later ticks instead of overlapping
/// them. Missed ticks are skipped rather than replayed in a burst.
///
/// The first tick fires one interval after the monitor is started. Since
/// there is no baseline yet, it reports every attached device as added.
///
/// # Type Parameters
///
/// * `S` - The [`DeviceSource`] to poll, usually a [`crate::router::RouterClient`]
///
/// # Example
///
/// ```no_run
/// use netgear_presence::monitor::PollingMonitor;
/// use netgear_presence::router::RouterClient;
/// use std::time::Duration;
///
/// # async fn example() {
/// let client = RouterClient::new("192.168.1.1", "admin", "password");
/// let handle = PollingMonitor::new(client, Duration::from_secs(10)).start(|event| match event {
///     Ok(change) => println!("{:?}: {}", change.change, change.device),
///     Err(e) => eprintln!("poll failed: {e}"),
/// });
///
/// tokio::time::sleep(Duration::from_secs(60)).await;
/// handle.stop();
/// # }
/// ```
#[derive(Debug)]
pub struct PollingMonitor<S> {
    source: S,
    interval: Duration,
}

impl<S> PollingMonitor<S>
where
    S: DeviceSource + 'static,
{
    /// Creates a new polling monitor.
    ///
    /// # Arguments
    ///
    /// * `source` - The device source to poll
    /// * `interval` - The interval between polls
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    ///
    /// An interval too large for the clock is accepted; the monitor then
    /// never polls.
    #[must_use]
    pub const fn new(source: S, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "poll interval must be non-zero");
        Self { source, interval }
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts polling on a background task and reports events to `handler`.
    ///
    /// The handler is called with `Ok(change)` once per detected change (all
    /// additions of a tick first, then all removals) and with `Err(error)`
    /// once for a tick whose login or fetch failed. Failed ticks are not
    /// retried; the next tick is the next chance.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start<F>(self, handler: F) -> StopHandle
    where
        F: FnMut(Result<ChangedDevice, RouterError>) + Send + 'static,
    {
        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(run(
            Tracker::new(self.source),
            self.interval,
            Arc::clone(&shutdown),
            handler,
        ));

        StopHandle { shutdown, task }
    }

    /// Starts polling and returns the events as a stream.
    ///
    /// Events arrive in the same order a [`Self::start`] handler would see
    /// them. Dropping the stream stops polling.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn into_stream(self) -> DeviceStream {
        let (tx, rx) = mpsc::unbounded_channel();

        // A closed receiver means the stream was dropped, which also stops polling
        let handle = self.start(move |event| {
            let _ = tx.send(event);
        });

        DeviceStream::new(rx, handle)
    }
}

/// Handle for a running [`PollingMonitor`].
///
/// Dropping the handle does not stop polling; call [`StopHandle::stop`].
#[derive(Debug)]
pub struct StopHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl StopHandle {
    /// Prevents any further ticks from starting.
    ///
    /// A tick already in progress runs to completion, including its
    /// handler calls.
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }

    /// Returns true once the polling task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the polling task to exit.
    ///
    /// Only returns after [`Self::stop`] has been called (or the handler
    /// panicked).
    ///
    /// # Errors
    ///
    /// Returns [`JoinError`] if the handler panicked.
    pub async fn join(self) -> Result<(), JoinError> {
        self.task.await
    }
}

/// The polling loop owned by the background task.
async fn run<S, F>(mut tracker: Tracker<S>, period: Duration, shutdown: Arc<Notify>, mut handler: F)
where
    S: DeviceSource,
    F: FnMut(Result<ChangedDevice, RouterError>),
{
    // A first tick beyond the clock's range would never fire
    let Some(first_tick) = Instant::now().checked_add(period) else {
        tracing::warn!("Poll interval {period:?} is out of range, no polls will run");
        shutdown.notified().await;
        return;
    };

    let mut ticker = interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            () = shutdown.notified() => {
                tracing::debug!("Polling stopped");
                return;
            }

            _ = ticker.tick() => {}
        }

        // Runs outside the select so stopping never cancels a tick mid-way
        match tracker.tick().await {
            Ok(changes) => {
                for change in changes {
                    handler(Ok(change));
                }
            }
            Err(e) => {
                tracing::debug!("Poll failed: {e}");
                handler(Err(e));
            }
        }
    }
}
