//! Netgear Presence: attached-device monitor for Netgear routers
//!
//! A library for polling a Netgear router's SOAP management interface
//! and reporting devices as they join or leave the network.

pub mod config;
pub mod device;
pub mod monitor;
pub mod router;
