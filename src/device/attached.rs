//! Core type for a device attached to the router.

use std::fmt;
use std::net::IpAddr;

use macaddr::MacAddr;

/// A single device reported by the router at one point in time.
///
/// The hardware address is the identity of a device; every other field is
/// informational and may change between snapshots without the device being
/// considered a different one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedDevice {
    /// The device's network address. `None` when the router omitted it or
    /// reported something that is not an IP address.
    pub ip: Option<IpAddr>,
    /// Host name reported by the router (may be empty).
    pub name: String,
    /// Hardware address, used as the stable identity key.
    pub mac: MacAddr,
    /// Connection type as reported by the router (e.g. "wired", "2.4G").
    pub kind: String,
    /// Link rate reported by the router, 0 when not reported.
    pub link_rate: i32,
    /// Signal strength reported by the router, 0 when not reported.
    pub signal: i32,
}

impl AttachedDevice {
    /// Creates a device with only a hardware address set.
    #[must_use]
    pub fn new(mac: impl Into<MacAddr>) -> Self {
        Self {
            ip: None,
            name: String::new(),
            mac: mac.into(),
            kind: String::new(),
            link_rate: 0,
            signal: 0,
        }
    }

    /// Sets the network address.
    #[must_use]
    pub const fn with_ip(mut self, ip: IpAddr) -> Self {
        self.ip = Some(ip);
        self
    }

    /// Sets the host name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the connection type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the link rate.
    #[must_use]
    pub const fn with_link_rate(mut self, link_rate: i32) -> Self {
        self.link_rate = link_rate;
        self
    }

    /// Sets the signal strength.
    #[must_use]
    pub const fn with_signal(mut self, signal: i32) -> Self {
        self.signal = signal;
        self
    }
}

impl fmt::Display for AttachedDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mac)?;

        if let Some(ip) = self.ip {
            write!(f, " ({ip})")?;
        }

        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }

        Ok(())
    }
}
