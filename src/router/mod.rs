//! Router layer for talking to the router's SOAP management interface.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The fixed set of SOAP operations ([`SoapAction`])
//! - The authenticated router client ([`RouterClient`])
//! - The device source seam used by the monitor ([`DeviceSource`])

mod client;
mod error;
mod http;
mod session;
mod soap;
mod source;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{EnvelopeError, HttpError, RouterError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use session::{DEFAULT_PORT, DEFAULT_SESSION_ID, RouterClient, endpoint_url};
pub use soap::SoapAction;
pub use source::DeviceSource;
