//! Device layer for representing and decoding attached-device lists.
//!
//! This module provides:
//! - The attached-device record ([`AttachedDevice`])
//! - Decoding of the router's delimited device list ([`decode_devices`])
//! - Decode failures ([`DecodeError`])

mod attached;
mod decode;


pub use attached::AttachedDevice;
pub use decode::{DecodeError, decode_devices};
