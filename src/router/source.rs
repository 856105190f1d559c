//! Device source trait used by the polling monitor.

use super::RouterError;
use crate::device::AttachedDevice;

/// Trait for anything that can authenticate and list attached devices.
///
/// [`super::RouterClient`] is the production implementation; the monitor
/// only depends on this trait so tests can script router behavior.
///
/// # Example
///
/// ```ignore
/// use netgear_presence::device::AttachedDevice;
/// use netgear_presence::router::{DeviceSource, RouterError};
///
/// struct Empty;
///
/// impl DeviceSource for Empty {
///     async fn login(&self) -> Result<(), RouterError> {
///         Ok(())
///     }
///
///     async fn fetch_devices(&self) -> Result<Vec<AttachedDevice>, RouterError> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DeviceSource: Send + Sync {
    /// Authenticates the session.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] if the request fails or the router rejects it.
    fn login(&self) -> impl std::future::Future<Output = Result<(), RouterError>> + Send;

    /// Fetches the full list of currently attached devices, in router order.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError`] if the request fails, the router rejects it,
    /// or the device list cannot be decoded.
    fn fetch_devices(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<AttachedDevice>, RouterError>> + Send;
}
