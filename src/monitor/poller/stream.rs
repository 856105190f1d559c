//! Stream of device change events.

use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::Stream;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::monitor::StopHandle;
use crate::monitor::ChangedDevice;
use crate::router::RouterError;

/// A stream of device change events produced by polling.
///
/// This type is returned by [`super::PollingMonitor::into_stream`]. Each item
/// is either one change or the error of one failed tick.
///
/// The stream ends only after [`DeviceStream::stop`] has been called and the
/// remaining buffered events are drained. Dropping it stops polling.
#[derive(Debug)]
pub struct DeviceStream {
    events: UnboundedReceiverStream<Result<ChangedDevice, RouterError>>,
    handle: StopHandle,
}

impl DeviceStream {
    pub(super) fn new(
        events: UnboundedReceiver<Result<ChangedDevice, RouterError>>,
        handle: StopHandle,
    ) -> Self {
        Self {
            events: UnboundedReceiverStream::new(events),
            handle,
        }
    }

    /// Prevents any further ticks from starting.
    ///
    /// Events already produced, and those of a tick in progress, are still
    /// delivered before the stream ends.
    pub fn stop(&self) {
        self.handle.stop();
    }
}

impl Stream for DeviceStream {
    type Item = Result<ChangedDevice, RouterError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.events).poll_next(cx)
    }
}

impl Drop for DeviceStream {
    fn drop(&mut self) {
        self.handle.stop();
    }
}
