//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

pub use crate::router::{DEFAULT_PORT as PORT, DEFAULT_SESSION_ID as SESSION_ID};

/// Default router host (the usual Netgear LAN address).
pub const HOST: &str = "192.168.1.1";

/// Default router admin username.
pub const USERNAME: &str = "admin";

/// Default polling interval in seconds.
pub const POLL_INTERVAL_SECS: u64 = 10;
